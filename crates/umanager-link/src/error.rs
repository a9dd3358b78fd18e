use thiserror::Error;
use tonic::{Code, Status};
use umanager_core::StorageError;
use umanager_proto_schema::v1::ConversionError;

#[derive(Debug, Error)]
pub enum LinkServiceError {
    #[error("link id is malformed: {0}")]
    MalformedLinkId(String),
    #[error("link not found: {0}")]
    LinkNotFound(String),
    #[error("storage operation failed: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}

impl LinkServiceError {
    /// Maps a storage failure for calls where a missing link is reported to
    /// the caller as NOT_FOUND rather than INTERNAL.
    pub fn from_lookup(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(id) => LinkServiceError::LinkNotFound(id),
            other => LinkServiceError::Storage(other),
        }
    }

    pub fn code(&self) -> Code {
        match self {
            LinkServiceError::MalformedLinkId(_) => Code::InvalidArgument,
            LinkServiceError::LinkNotFound(_) => Code::NotFound,
            LinkServiceError::Storage(_) => Code::Internal,
        }
    }
}

impl From<ConversionError> for LinkServiceError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::MalformedLinkId(message) => LinkServiceError::MalformedLinkId(message),
        }
    }
}

impl From<LinkServiceError> for Status {
    fn from(error: LinkServiceError) -> Self {
        let code = error.code();
        match error {
            LinkServiceError::MalformedLinkId(message) => Status::new(code, message),
            LinkServiceError::LinkNotFound(id) => {
                Status::new(code, format!("link not found: {id}"))
            }
            LinkServiceError::Storage(source) => Status::new(code, source.to_string()),
        }
    }
}
