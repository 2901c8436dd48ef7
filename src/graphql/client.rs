use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, ORIGIN};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::errors::ClientError;
use crate::graphql::error::{GraphQLError, RequestFailure};
use crate::graphql::queries::Operation;
use crate::graphql::upload::Upload;
use crate::metrics::registry::{
    GRAPHQL_OPERATIONS_TOTAL, GRAPHQL_OPERATION_DURATION_SECONDS, GRAPHQL_OPERATION_FAILURES_TOTAL,
};

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL-over-HTTP client for the analysis API
///
/// The session token and locale are fixed at construction; build a new
/// client after signing in or out.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    pub fn new(config: &ApiConfig, token: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.locale)?);
        headers.insert(ORIGIN, header_value(&config.origin)?);
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = header_value(token)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("ov-dashboard/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        debug!(
            "Initialized GraphQL client for {} (authenticated={})",
            config.graphql_url,
            token.is_some_and(|t| !t.is_empty())
        );

        Ok(Self {
            http_client,
            endpoint: config.graphql_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run an operation and decode the value under its root field
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, RequestFailure> {
        let body = json!({
            "query": operation.document,
            "variables": variables,
            "operationName": operation.name,
        });

        let request = self.http_client.post(&self.endpoint).json(&body);
        self.send(operation, request).await
    }

    /// Run an operation with one file attached at `variables.<file_path>`
    ///
    /// Follows the GraphQL multipart request protocol: the file's slot in the
    /// variables is sent as `null` and mapped to multipart part `0`.
    pub async fn execute_with_upload<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        mut variables: Value,
        file_path: &str,
        upload: Upload,
    ) -> Result<T, RequestFailure> {
        set_null_at(&mut variables, file_path);

        let operations = json!({
            "query": operation.document,
            "variables": variables,
            "operationName": operation.name,
        });
        let map = json!({ "0": [format!("variables.{}", file_path)] });

        let part = match Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
        {
            Ok(part) => part,
            Err(e) => {
                warn!("Invalid content type for upload: {}", e);
                return Err(RequestFailure::transport());
            }
        };

        let form = Form::new()
            .text("operations", operations.to_string())
            .text("map", map.to_string())
            .part("0", part);

        let request = self.http_client.post(&self.endpoint).multipart(form);
        self.send(operation, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestFailure> {
        let request_id = Uuid::new_v4().to_string();
        debug!("Sending {} (request_id={})", operation.name, request_id);

        GRAPHQL_OPERATIONS_TOTAL
            .with_label_values(&[operation.name])
            .inc();
        let timer = GRAPHQL_OPERATION_DURATION_SECONDS
            .with_label_values(&[operation.name])
            .start_timer();

        let result = self
            .dispatch(operation, request.header("X-Request-Id", request_id.as_str()))
            .await;
        timer.observe_duration();

        if let Err(failure) = &result {
            GRAPHQL_OPERATION_FAILURES_TOTAL
                .with_label_values(&[operation.name, failure.kind()])
                .inc();
            debug!(
                "{} failed (request_id={}, kind={}, errors={})",
                operation.name,
                request_id,
                failure.kind(),
                failure.graphql_errors.len()
            );
        }

        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestFailure> {
        let response = request.send().await.map_err(|e| {
            warn!("Failed to send {} to {}: {}", operation.name, self.endpoint, e);
            RequestFailure::transport()
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!("Failed to read {} response body: {}", operation.name, e);
            RequestFailure::transport()
        })?;

        let body: GraphQLResponse = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(RequestFailure::from_message(format!(
                    "Response not successful: Received status code {}",
                    status.as_u16()
                )));
            }
            Err(e) => {
                warn!("Failed to parse {} response: {}", operation.name, e);
                return Err(RequestFailure::transport());
            }
        };

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            return Err(RequestFailure::from_graphql_errors(errors));
        }

        if !status.is_success() {
            return Err(RequestFailure::from_message(format!(
                "Response not successful: Received status code {}",
                status.as_u16()
            )));
        }

        let root = body
            .data
            .as_ref()
            .and_then(|data| data.get(operation.root_field))
            .cloned()
            .ok_or_else(|| RequestFailure::from_message("No data returned"))?;

        serde_json::from_value(root).map_err(|e| {
            warn!("Unexpected shape for {}: {}", operation.root_field, e);
            RequestFailure::transport()
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value)
        .map_err(|_| ClientError::Config(format!("'{}' is not a valid header value", value)))
}

/// Set the value at a dotted path (e.g. `input.travelHistoryFile`) to null
fn set_null_at(variables: &mut Value, path: &str) {
    let mut current = variables;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        let Some(object) = current.as_object_mut() else {
            return;
        };
        if segments.peek().is_none() {
            object.insert(segment.to_string(), Value::Null);
            return;
        }
        current = object
            .entry(segment.to_string())
            .or_insert_with(|| json!({}));
    }
}
