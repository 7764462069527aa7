use thiserror::Error;

use crate::storage::StoreError;

/// Input rejected before any state was touched
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a word")]
    Empty,

    #[error("Word can only contain letters (A-Z)")]
    InvalidChars,

    #[error("Word already exists in the word bank")]
    Duplicate,

    #[error("Player names cannot be empty")]
    EmptyName,

    #[error("Player names must be different")]
    DuplicateName,

    #[error("No words in the word bank, add some words first")]
    EmptyBank,
}

/// Errors returned by word bank and round engine operations
///
/// Every variant is recoverable: the operation that produced it left all
/// state exactly as it was before the call.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No word at index {index} (word bank has {len} words)")]
    Index { index: usize, len: usize },

    #[error("No match in progress")]
    MatchNotStarted,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl GameError {
    /// The validation failure carried by this error, if any
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            GameError::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
