// idcard/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid identity code: structural mismatch ({length} characters)")]
    StructuralMismatch { length: usize },

    #[error("invalid identity code: checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: char, actual: char },

    #[error("invalid identity code: non-digit {found:?} at offset {index}")]
    InvalidDigit { index: usize, found: char },

    #[error("place table line {line}: {reason}")]
    PlaceTable { line: usize, reason: String },
}

impl Error {
    /// True for every variant that means "this is not a valid identity code".
    pub fn is_invalid_code(&self) -> bool {
        !matches!(self, Error::PlaceTable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
