use thiserror::Error;

/// リスト操作のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// `get(i)`の`i`が`[0, size)`の範囲外
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
