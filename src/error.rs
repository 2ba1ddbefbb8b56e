use crate::cards::Category;
use thiserror::Error;

/// Everything a command can be rejected for.
///
/// A rejected command leaves the notebook untouched. Contradictions discovered
/// in the middle of a cascade are not errors: they are logged and skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{card} is already known to be held by {holder}")]
    AlreadyKnown { card: String, holder: String },

    #[error("{card} has already been ruled out for {holder}")]
    RuledOut { card: String, holder: String },

    #[error("no move {index} to undo ({len} committed)")]
    InvalidUndoTarget { index: usize, len: usize },

    #[error("no player in seat {0}")]
    UnknownSeat(usize),

    #[error("no card named {0}")]
    UnknownCard(String),

    #[error("{card} is not a {expected}")]
    Category { card: String, expected: Category },

    #[error("invalid setup: {0}")]
    Setup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
