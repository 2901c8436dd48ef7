use serde::{Deserialize, Serialize};

use crate::message_bag::MessageBag;

/// A field-level rejection, ready to render under the matching input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Validation errors grouped by field name
pub type ValidationErrorMessageBag = MessageBag<String, ValidationError>;

/// A remote error after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedError {
    /// Attributable to one form field
    Validation(ValidationError),
    /// Anything that is not a field validation error
    General { message: String },
}
