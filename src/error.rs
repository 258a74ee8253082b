//! PantryVoice Error Types
//!
//! The text pipeline itself never fails; these cover startup and storage.

use thiserror::Error;

use crate::lexicon::LexiconError;

/// Central error type for PantryVoice
#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("List store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for PantryVoice operations
pub type PantryResult<T> = Result<T, PantryError>;
