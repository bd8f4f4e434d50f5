//! Errors - 名前値の操作エラーと分類

use thiserror::Error;

/// ErrorKind は NameError の分類
///
/// - Argument: 呼び出し側の引数が構造的に不正（区切り文字、インデックス範囲）
/// - Masking: マスク済みコンポーネントがエスケープ規則に違反
/// - Invariant: 値自身の不変条件が破れている（実装の欠陥）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    Masking,
    Invariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NameError {
    #[error("invalid delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("invalid name config: {0}")]
    InvalidConfig(String),

    #[error("component index {index} out of range (component count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("insert index {index} out of range (component count {len})")]
    InsertOutOfRange { index: usize, len: usize },

    #[error("dangling escape in masked component {component:?}")]
    DanglingEscape { component: String },

    #[error("unescaped delimiter {delimiter:?} in masked component {component:?}")]
    UnescapedDelimiter { component: String, delimiter: char },

    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, NameError>;

impl NameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NameError::InvalidDelimiter(_)
            | NameError::InvalidConfig(_)
            | NameError::IndexOutOfRange { .. }
            | NameError::InsertOutOfRange { .. } => ErrorKind::Argument,
            NameError::DanglingEscape { .. } | NameError::UnescapedDelimiter { .. } => {
                ErrorKind::Masking
            }
            NameError::Invariant(_) => ErrorKind::Invariant,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            NameError::InvalidDelimiter(_) => "invalid_delimiter",
            NameError::InvalidConfig(_) => "invalid_config",
            NameError::IndexOutOfRange { .. } => "index_out_of_range",
            NameError::InsertOutOfRange { .. } => "insert_out_of_range",
            NameError::DanglingEscape { .. } => "dangling_escape",
            NameError::UnescapedDelimiter { .. } => "unescaped_delimiter",
            NameError::Invariant(_) => "invariant",
        }
    }

    pub fn is_masking(&self) -> bool {
        self.kind() == ErrorKind::Masking
    }
}
