use thiserror::Error;

/// Result type for link storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors reported by a link storage backend.
///
/// [`StorageError::NotFound`] is the only variant callers are expected to
/// branch on; everything else is an opaque backend failure.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("link not found: {0}")]
    NotFound(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid link id '{id}': {reason}")]
    InvalidLinkId { id: String, reason: String },
}
