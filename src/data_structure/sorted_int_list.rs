use std::fmt;

use tracing::trace;

use crate::config::{DuplicatePolicy, ListConfig, RemovalPolicy};
use crate::error::ListError;
use crate::interface::int_list::IntList;

/// 常に昇順(x(i) <= x(i+1))を保つ整数リスト
///
/// 挿入位置は二分探索で求めるので、add(x)は探索O(log n)と要素の移動O(n)
/// get(i), size()はO(1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedIntList {
    a: Vec<i32>,
    config: ListConfig,
}

impl SortedIntList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ListConfig) -> Self {
        Self {
            a: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.a.iter()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.a
    }

    pub fn contains(&self, x: i32) -> bool {
        self.a.binary_search(&x).is_ok()
    }

    /// xと等しい値の並びの範囲の先頭
    fn lower_bound(&self, x: i32) -> usize {
        self.a.partition_point(|&y| y < x)
    }

    /// xと等しい値の並びの範囲の末尾(の次)
    fn upper_bound(&self, x: i32) -> usize {
        self.a.partition_point(|&y| y <= x)
    }

    /// xに等しい要素をすべて削除し、削除した個数を返す
    fn remove_every(&mut self, x: i32) -> usize {
        let (lo, hi) = (self.lower_bound(x), self.upper_bound(x));
        self.a.drain(lo..hi);
        hi - lo
    }
}

impl IntList for SortedIntList {
    fn add(&mut self, x: i32) -> bool {
        if self.config.duplicates == DuplicatePolicy::Reject && self.contains(x) {
            trace!(value = x, changed = false, "sorted add rejected duplicate");
            return false;
        }
        // 等しい値の並びの後ろに入れる
        let i = self.upper_bound(x);
        self.a.insert(i, x);
        trace!(value = x, index = i, size = self.a.len(), "sorted add");
        true
    }

    fn remove(&mut self, x: i32) -> bool {
        match self.a.binary_search(&x) {
            Ok(_) => {
                // binary_searchは等しい値のどれを返すか決まっていないので先頭を探し直す
                let i = self.lower_bound(x);
                self.a.remove(i);
                trace!(value = x, index = i, size = self.a.len(), "sorted remove");
                true
            }
            Err(_) => false,
        }
    }

    fn size(&self) -> usize {
        self.a.len()
    }

    fn get(&self, i: usize) -> Result<i32, ListError> {
        self.a.get(i).copied().ok_or(ListError::IndexOutOfRange {
            index: i,
            size: self.a.len(),
        })
    }

    fn remove_all(&mut self, other: &dyn IntList) -> bool {
        let mut changed = false;
        for i in 0..other.size() {
            let Ok(x) = other.get(i) else { continue };
            changed |= match self.config.removal {
                RemovalPolicy::OnePerMatch => self.remove(x),
                RemovalPolicy::AllOccurrences => self.remove_every(x) > 0,
            };
        }
        trace!(changed, size = self.a.len(), "sorted remove_all");
        changed
    }

    fn to_vec(&self) -> Vec<i32> {
        self.a.clone()
    }
}

impl FromIterator<i32> for SortedIntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        for x in iter {
            list.add(x);
        }
        list
    }
}

impl<'a> IntoIterator for &'a SortedIntList {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SortedIntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.a.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
