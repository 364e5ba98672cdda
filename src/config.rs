use serde::{Deserialize, Serialize};

/// 既に含まれている値を`add`したときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// 重複を許す。等しい値の並びの末尾に挿入し、`add`は常にtrueを返す
    #[default]
    Allow,
    /// 重複を拒否する。既に含まれていれば何もせずfalseを返す
    Reject,
}

/// `remove_all(other)`の意味
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// otherの要素1つにつき、一致する要素を1つだけ削除する(多重集合の差)
    #[default]
    OnePerMatch,
    /// otherに現れる値は、出現をすべて削除する(集合の差)
    AllOccurrences,
}

/// [`SortedIntList`](crate::SortedIntList)の設定
///
/// 省略されたフィールドはデフォルト値になるので、`{}`も有効な設定として読み込める
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub duplicates: DuplicatePolicy,
    pub removal: RemovalPolicy,
}

impl ListConfig {
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }
}
