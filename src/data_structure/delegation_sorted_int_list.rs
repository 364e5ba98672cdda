use tracing::trace;

use crate::config::ListConfig;
use crate::data_structure::sorted_int_list::SortedIntList;
use crate::error::ListError;
use crate::interface::counting::CountingIntList;
use crate::interface::int_list::IntList;

/// SortedIntListに委譲し、追加を試みた要素数を数えるリスト
///
/// 内部のSortedIntListは外に出さない。IntListの操作はすべて内部のリストへ転送する
/// 現在の要素数(size)とは異なり、total_addedは削除しても減らない
#[derive(Debug, Clone, Default)]
pub struct DelegationSortedIntList {
    delegate: SortedIntList,
    total_added: usize,
}

impl DelegationSortedIntList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ListConfig) -> Self {
        Self {
            delegate: SortedIntList::with_config(config),
            total_added: 0,
        }
    }
}

impl IntList for DelegationSortedIntList {
    fn add(&mut self, x: i32) -> bool {
        self.total_added += 1;
        trace!(value = x, total_added = self.total_added, "delegation add");
        self.delegate.add(x)
    }

    /// delegate.add_allにまとめて渡すとカウントできないので、1要素ずつ数えて渡す
    fn add_all(&mut self, other: &dyn IntList) -> bool {
        let mut changed = false;
        for i in 0..other.size() {
            if let Ok(x) = other.get(i) {
                self.total_added += 1;
                changed |= self.delegate.add(x);
            }
        }
        trace!(changed, total_added = self.total_added, "delegation add_all");
        changed
    }

    fn remove(&mut self, x: i32) -> bool {
        self.delegate.remove(x)
    }

    fn remove_all(&mut self, other: &dyn IntList) -> bool {
        self.delegate.remove_all(other)
    }

    fn size(&self) -> usize {
        self.delegate.size()
    }

    fn get(&self, i: usize) -> Result<i32, ListError> {
        self.delegate.get(i)
    }
}

impl CountingIntList for DelegationSortedIntList {
    fn total_added(&self) -> usize {
        self.total_added
    }
}
