use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification code the API attaches to field-level rejections
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";

/// Error codes found in `extensions.code` of GraphQL errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// Input validation failed for a single field
    ValidationError,

    /// Any other code the server sends
    Other(String),
}

impl ErrorCode {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ValidationError => VALIDATION_ERROR_CODE,
            Self::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        if code == VALIDATION_ERROR_CODE {
            Self::ValidationError
        } else {
            Self::Other(code.to_string())
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
