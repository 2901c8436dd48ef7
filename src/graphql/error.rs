use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::ErrorCode;

/// One segment of a GraphQL error path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(u64),
    Field(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Field(name) => f.write_str(name),
        }
    }
}

/// A single entry of the `errors` array in a GraphQL response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert("code".to_string(), Value::String(code.into()));
        self
    }

    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = Some(path.into_iter().map(|s| PathSegment::Field(s.into())).collect());
        self
    }

    /// `extensions.code`, when present and a string
    pub fn code(&self) -> Option<ErrorCode> {
        self.extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code"))
            .and_then(Value::as_str)
            .map(ErrorCode::from)
    }

    pub fn is_validation(&self) -> bool {
        self.code().is_some_and(|code| code.is_validation())
    }

    /// Name of the field the error belongs to (last path segment)
    pub fn field(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|path| path.last())
            .map(ToString::to_string)
    }
}

/// A failed remote call, as seen by the error classifier
///
/// `message` is the failure's own description and `graphql_errors` the
/// structured errors from the response body. Transport failures carry no
/// structured errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestFailure {
    pub message: Option<String>,
    pub graphql_errors: Vec<GraphQLError>,
}

impl RequestFailure {
    pub fn from_graphql_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            message: None,
            graphql_errors: errors,
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            graphql_errors: Vec::new(),
        }
    }

    /// A failure with neither a message nor structured errors
    pub fn transport() -> Self {
        Self::default()
    }

    /// Metrics label for this failure
    pub fn kind(&self) -> &'static str {
        if self.graphql_errors.is_empty() {
            "transport"
        } else if self.graphql_errors.iter().all(GraphQLError::is_validation) {
            "validation"
        } else {
            "server"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_mixed_path() {
        let error: GraphQLError = serde_json::from_value(json!({
            "message": "email is required",
            "path": ["createUser", 0, "email"],
            "locations": [{"line": 1, "column": 2}],
            "extensions": {"code": "VALIDATION_ERROR"}
        }))
        .unwrap();

        assert_eq!(
            error.path,
            Some(vec![
                PathSegment::Field("createUser".to_string()),
                PathSegment::Index(0),
                PathSegment::Field("email".to_string()),
            ])
        );
        assert_eq!(error.field(), Some("email".to_string()));
        assert!(error.is_validation());
    }

    #[test]
    fn test_numeric_last_segment_is_stringified() {
        let error: GraphQLError =
            serde_json::from_value(json!({"message": "bad", "path": ["items", 3]})).unwrap();
        assert_eq!(error.field(), Some("3".to_string()));
    }

    #[test]
    fn test_non_string_code_is_ignored() {
        let error: GraphQLError =
            serde_json::from_value(json!({"message": "oops", "extensions": {"code": 500}}))
                .unwrap();
        assert_eq!(error.code(), None);
        assert!(!error.is_validation());
    }

    #[test]
    fn test_missing_fields_default() {
        let error: GraphQLError = serde_json::from_value(json!({})).unwrap();
        assert_eq!(error.message, "");
        assert!(error.path.is_none());
        assert!(error.field().is_none());
    }

    #[test]
    fn test_failure_kind() {
        assert_eq!(RequestFailure::transport().kind(), "transport");

        let validation = GraphQLError::new("required").with_code("VALIDATION_ERROR");
        let failure = RequestFailure::from_graphql_errors(vec![validation.clone()]);
        assert_eq!(failure.kind(), "validation");

        let failure =
            RequestFailure::from_graphql_errors(vec![validation, GraphQLError::new("DB down")]);
        assert_eq!(failure.kind(), "server");
    }
}
