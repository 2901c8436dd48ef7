use super::validation::{ValidationError, ValidationErrorMessageBag};

/// Uniform result of a remote operation
///
/// Holds either the success payload, or an error title and/or field
/// validation errors. Validation errors take precedence: a response with a
/// non-empty bag is a validation failure even when a title is also set.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    error_title: Option<String>,
    validation_errors: Option<ValidationErrorMessageBag>,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(
        error_title: Option<String>,
        validation_errors: Option<ValidationErrorMessageBag>,
        data: Option<T>,
    ) -> Self {
        Self {
            error_title,
            validation_errors,
            data,
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(None, None, Some(data))
    }

    pub fn failure(error_title: impl Into<String>, validation_errors: ValidationErrorMessageBag) -> Self {
        Self::new(Some(error_title.into()), Some(validation_errors), None)
    }

    /// Attach a payload to a failed response (e.g. `false` for a mutation that did not happen)
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.has_validation_errors() && !self.has_server_error()
    }

    pub fn has_validation_errors(&self) -> bool {
        self.validation_errors
            .as_ref()
            .is_some_and(|bag| !bag.is_empty())
    }

    pub fn has_server_error(&self) -> bool {
        self.error_title.is_some() && !self.has_validation_errors()
    }

    pub fn error_title(&self) -> Option<&str> {
        self.error_title.as_deref()
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrorMessageBag> {
        self.validation_errors.as_ref()
    }

    /// First validation error recorded for `field`
    pub fn first_error(&self, field: &str) -> Option<&ValidationError> {
        self.validation_errors
            .as_ref()
            .and_then(|bag| bag.first(&field.to_string()))
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Short label for logs and metrics
    pub fn outcome(&self) -> &'static str {
        if self.has_validation_errors() {
            "validation"
        } else if self.has_server_error() {
            "server"
        } else {
            "ok"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag_with(field: &str, message: &str) -> ValidationErrorMessageBag {
        let mut bag = ValidationErrorMessageBag::new();
        bag.add(field.to_string(), ValidationError::new(field, message));
        bag
    }

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success(true);

        assert!(response.is_valid());
        assert!(!response.has_server_error());
        assert!(!response.has_validation_errors());
        assert_eq!(response.data(), Some(&true));
        assert_eq!(response.error_title(), None);
        assert_eq!(response.outcome(), "ok");
    }

    #[test]
    fn test_validation_errors_take_precedence_over_title() {
        let response: ApiResponse<bool> =
            ApiResponse::failure("Internal server error", bag_with("email", "Email is required"));

        assert!(response.has_validation_errors());
        assert!(!response.has_server_error());
        assert!(!response.is_valid());
        assert_eq!(
            response.first_error("email").map(|e| e.message.as_str()),
            Some("Email is required")
        );
        assert_eq!(response.outcome(), "validation");
    }

    #[test]
    fn test_server_error_with_empty_bag() {
        let response: ApiResponse<bool> =
            ApiResponse::failure("DB down", ValidationErrorMessageBag::new());

        assert!(response.has_server_error());
        assert!(!response.has_validation_errors());
        assert!(!response.is_valid());
        assert_eq!(response.error_title(), Some("DB down"));
        assert!(response.first_error("email").is_none());
    }

    #[test]
    fn test_failure_with_data() {
        let response = ApiResponse::failure("denied", ValidationErrorMessageBag::new()).with_data(false);

        assert!(!response.is_valid());
        assert_eq!(response.into_data(), Some(false));
    }

    #[test]
    fn test_empty_response_is_valid() {
        let response: ApiResponse<()> = ApiResponse::new(None, None, None);

        assert!(response.is_valid());
        assert!(response.data().is_none());
    }
}
