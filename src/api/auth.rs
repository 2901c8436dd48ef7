use serde_json::json;

use super::base::BaseApi;
use crate::errors::ApiResponse;
use crate::graphql::queries::{CANCEL_TOKEN, REFRESH_TOKEN};

/// Session management for a signed-in user
#[derive(Debug, Clone)]
pub struct AuthApi {
    base: BaseApi,
}

impl AuthApi {
    pub fn new(base: BaseApi) -> Self {
        Self { base }
    }

    /// Invalidate the current session token
    ///
    /// A failed logout still carries `false` as its data.
    pub async fn logout(&self) -> ApiResponse<bool> {
        let response: ApiResponse<bool> = self.base.run(&CANCEL_TOKEN, json!({})).await;
        if response.is_valid() {
            response
        } else {
            response.with_data(false)
        }
    }

    /// Exchange `token` for a fresh one
    pub async fn refresh_token(&self, token: &str) -> ApiResponse<String> {
        self.base
            .run(&REFRESH_TOKEN, json!({ "input": { "token": token } }))
            .await
    }
}
