use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::{ApiResponse, ClassifiedError, ValidationError, ValidationErrorMessageBag};
use crate::graphql::queries::Operation;
use crate::graphql::{GraphQLClient, GraphQLError, RequestFailure, Upload};
use crate::utils::start_case;

/// Splits a failed call into one display message and per-field errors
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    internal_error_message: String,
}

impl ErrorClassifier {
    pub fn new(internal_error_message: impl Into<String>) -> Self {
        Self {
            internal_error_message: internal_error_message.into(),
        }
    }

    /// Message of the first non-validation error
    ///
    /// Falls back to the failure's own message, then to the configured
    /// internal error message.
    pub fn extract_main_error(&self, failure: &RequestFailure) -> String {
        let main = failure
            .graphql_errors
            .iter()
            .find(|error| !error.is_validation())
            .map(|error| error.message.as_str());

        match main {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => failure
                .message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(self.internal_error_message.as_str())
                .to_string(),
        }
    }

    /// Field errors keyed by the last segment of each validation error's path
    pub fn map_error_to_message_bag(&self, failure: &RequestFailure) -> ValidationErrorMessageBag {
        let mut bag = ValidationErrorMessageBag::new();

        for classified in self.classify(failure) {
            if let ClassifiedError::Validation(error) = classified {
                bag.add(error.key.clone(), error);
            }
        }

        bag
    }

    /// Tag every error as a field validation error or a general one
    ///
    /// Validation errors without a path cannot be attached to a field and
    /// are left out.
    pub fn classify(&self, failure: &RequestFailure) -> Vec<ClassifiedError> {
        failure
            .graphql_errors
            .iter()
            .filter_map(|error| {
                if !error.is_validation() {
                    return Some(ClassifiedError::General {
                        message: error.message.clone(),
                    });
                }

                match error.field() {
                    Some(key) => Some(ClassifiedError::Validation(validation_error(error, key))),
                    None => {
                        debug!("Dropping validation error without a path: {}", error.message);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn failure_response<T>(&self, failure: &RequestFailure) -> ApiResponse<T> {
        ApiResponse::failure(
            self.extract_main_error(failure),
            self.map_error_to_message_bag(failure),
        )
    }
}

fn validation_error(error: &GraphQLError, key: String) -> ValidationError {
    let message = if key.is_empty() {
        error.message.clone()
    } else {
        replace_whole_word(&error.message, &key, &start_case(&key))
    };

    ValidationError { key, message }
}

/// Replace `word` only where it stands on its own, so `id` leaves `invalid` alone
fn replace_whole_word(text: &str, word: &str, replacement: &str) -> String {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let joined_before = text[..start].chars().next_back().is_some_and(is_word_char);
        let joined_after = text[end..].chars().next().is_some_and(is_word_char);
        if joined_before || joined_after {
            continue;
        }

        result.push_str(&text[last..start]);
        result.push_str(replacement);
        last = end;
    }

    result.push_str(&text[last..]);
    result
}

/// Shared plumbing for the API facades: run an operation, wrap the outcome
#[derive(Debug, Clone)]
pub struct BaseApi {
    client: GraphQLClient,
    classifier: ErrorClassifier,
}

impl BaseApi {
    pub fn new(client: GraphQLClient, classifier: ErrorClassifier) -> Self {
        Self { client, classifier }
    }

    pub(crate) async fn run<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ApiResponse<T> {
        let result = self.client.execute(operation, variables).await;
        self.respond(operation, result)
    }

    pub(crate) async fn run_with_upload<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
        file_path: &str,
        upload: Upload,
    ) -> ApiResponse<T> {
        let result = self
            .client
            .execute_with_upload(operation, variables, file_path, upload)
            .await;
        self.respond(operation, result)
    }

    fn respond<T>(&self, operation: &Operation, result: Result<T, RequestFailure>) -> ApiResponse<T> {
        let response = match result {
            Ok(data) => ApiResponse::success(data),
            Err(failure) => self.classifier.failure_response(&failure),
        };
        debug!("{} finished: {}", operation.name, response.outcome());
        response
    }
}
