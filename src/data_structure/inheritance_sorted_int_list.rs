use std::fmt;
use std::ops::Deref;

use tracing::trace;

use crate::config::ListConfig;
use crate::data_structure::sorted_int_list::SortedIntList;
use crate::error::ListError;
use crate::interface::counting::CountingIntList;
use crate::interface::int_list::IntList;

/// SortedIntListを土台に、追加を試みた要素数を数えるリスト
///
/// 上書きするのは`add`だけ。`add_all`はIntListのデフォルト実装をそのまま使い、
/// デフォルト実装が要素ごとに`self.add`を呼ぶことで各要素が1回ずつ数えられる
/// `remove`, `remove_all`, `size`, `get`は土台のSortedIntListの振る舞いのまま
///
/// Derefで土台の`iter`, `as_slice`, `contains`なども使える
#[derive(Debug, Clone, Default)]
pub struct InheritanceSortedIntList {
    base: SortedIntList,
    total_added: usize,
}

impl InheritanceSortedIntList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ListConfig) -> Self {
        Self {
            base: SortedIntList::with_config(config),
            total_added: 0,
        }
    }
}

impl Deref for InheritanceSortedIntList {
    type Target = SortedIntList;

    fn deref(&self) -> &SortedIntList {
        &self.base
    }
}

impl IntList for InheritanceSortedIntList {
    fn add(&mut self, x: i32) -> bool {
        self.total_added += 1;
        trace!(value = x, total_added = self.total_added, "inheritance add");
        self.base.add(x)
    }

    fn remove(&mut self, x: i32) -> bool {
        self.base.remove(x)
    }

    fn remove_all(&mut self, other: &dyn IntList) -> bool {
        self.base.remove_all(other)
    }

    fn size(&self) -> usize {
        self.base.size()
    }

    fn get(&self, i: usize) -> Result<i32, ListError> {
        self.base.get(i)
    }
}

impl CountingIntList for InheritanceSortedIntList {
    fn total_added(&self) -> usize {
        self.total_added
    }
}

impl fmt::Display for InheritanceSortedIntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::config::{DuplicatePolicy, RemovalPolicy};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add() {
        let mut list = InheritanceSortedIntList::new();
        assert_eq!(list.total_added(), 0);
        list.add(5);
        list.add(3);
        list.add(5);
        assert_eq!(list.as_slice(), &[3, 5, 5]);
        assert_eq!(list.total_added(), 3);
        assert_eq!(list.to_string(), "[3, 5, 5]");
    }

    #[test]
    fn test_add_all_counts_each_element() {
        let source: SortedIntList = [7, 1, 4].into_iter().collect();
        let mut list = InheritanceSortedIntList::new();
        assert!(list.add_all(&source));
        assert_eq!(list.total_added(), 3);
        assert_eq!(list.to_vec(), vec![1, 4, 7]);

        assert!(!list.add_all(&SortedIntList::new()));
        assert_eq!(list.total_added(), 3);
    }

    #[test]
    fn test_add_all_through_trait_object() {
        let source: SortedIntList = [2, 2, 8].into_iter().collect();
        let mut list = InheritanceSortedIntList::new();
        {
            let as_list: &mut dyn IntList = &mut list;
            as_list.add_all(&source);
        }
        assert_eq!(list.total_added(), 3);
    }

    #[test]
    fn test_add_rejected_still_counted() {
        let config = ListConfig::default().with_duplicates(DuplicatePolicy::Reject);
        let mut list = InheritanceSortedIntList::with_config(config);
        let source: SortedIntList = [1, 1, 1].into_iter().collect();
        assert!(list.add_all(&source));
        assert_eq!(list.as_slice(), &[1]);
        assert_eq!(list.total_added(), 3);
    }

    #[test]
    fn test_remove_all_uses_base_policy() {
        let config = ListConfig::default().with_removal(RemovalPolicy::AllOccurrences);
        let mut list = InheritanceSortedIntList::with_config(config);
        for x in [3, 3, 3, 6] {
            list.add(x);
        }
        let drop: SortedIntList = [3].into_iter().collect();
        assert!(list.remove_all(&drop));
        assert_eq!(list.as_slice(), &[6]);
        assert_eq!(list.total_added(), 4);
    }

    #[test]
    fn test_remove_does_not_count() {
        let mut list = InheritanceSortedIntList::new();
        for x in [1, 2, 3, 4, 5] {
            list.add(x);
        }
        list.remove(2);
        list.remove(4);
        assert_eq!(list.size(), 3);
        assert_eq!(list.total_added(), 5);
        assert!(list.contains(5));
    }
}
