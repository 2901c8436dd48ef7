//! Error types: remote error classification results and local client errors

pub mod codes;
pub mod response;
pub mod validation;

pub use codes::{ErrorCode, VALIDATION_ERROR_CODE};
pub use response::ApiResponse;
pub use validation::{ClassifiedError, ValidationError, ValidationErrorMessageBag};

/// Failures that happen on this side of the wire
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
