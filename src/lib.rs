//! 昇順に整列された整数リストと、追加の「試行回数」を数える2つのリスト
//!
//! - [`SortedIntList`]: 常に昇順を保つ整数リスト
//! - [`DelegationSortedIntList`]: 委譲(delegation)によってカウンタを付け加えたもの
//! - [`InheritanceSortedIntList`]: 継承(inheritance)相当の方法でカウンタを付け加えたもの
//!
//! 継承版はトレイトのデフォルトメソッド`add_all`が`add`を呼び出すことに依存する。
//! 委譲版は`add_all`の反復を自前で行う。どちらも同じ操作列に対して同じ`total_added`を返す。

pub mod config;
pub mod error;
pub mod logger;

pub mod interface {
    pub mod counting;
    pub mod int_list;
}

pub mod data_structure {
    pub mod delegation_sorted_int_list;
    pub mod inheritance_sorted_int_list;
    pub mod shared_list;
    pub mod sorted_int_list;
}

pub use config::{DuplicatePolicy, ListConfig, RemovalPolicy};
pub use data_structure::delegation_sorted_int_list::DelegationSortedIntList;
pub use data_structure::inheritance_sorted_int_list::InheritanceSortedIntList;
pub use data_structure::shared_list::SharedList;
pub use data_structure::sorted_int_list::SortedIntList;
pub use error::ListError;
pub use interface::counting::CountingIntList;
pub use interface::int_list::IntList;
