use serde_json::json;
use tracing::info;

use super::base::BaseApi;
use crate::errors::ApiResponse;
use crate::graphql::queries::{CREATE_USER, LOGIN};
use crate::models::{AuthOutput, CreateUserInput, LoginInput};

/// Sign-up and sign-in, available without a session
#[derive(Debug, Clone)]
pub struct LandingPageApi {
    base: BaseApi,
}

impl LandingPageApi {
    pub fn new(base: BaseApi) -> Self {
        Self { base }
    }

    pub async fn sign_up(&self, input: &CreateUserInput) -> ApiResponse<AuthOutput> {
        info!("Creating account for {}", input.email);
        self.base.run(&CREATE_USER, json!({ "input": input })).await
    }

    pub async fn login(&self, input: &LoginInput) -> ApiResponse<AuthOutput> {
        info!("Logging in as {}", input.email);
        self.base.run(&LOGIN, json!({ "input": input })).await
    }
}
