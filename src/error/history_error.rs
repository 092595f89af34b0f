use thiserror::Error;

/// Errors raised while reading or writing a history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The file could not be read or written.
    #[error("History file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid history document.
    #[error("History file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}
