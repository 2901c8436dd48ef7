//! Typed facades over the GraphQL API
//!
//! Every operation resolves to an [`ApiResponse`](crate::errors::ApiResponse);
//! remote failures never surface as `Err`.

pub mod auth;
pub mod base;
pub mod dashboard;
pub mod landing_page;

pub use auth::AuthApi;
pub use base::{BaseApi, ErrorClassifier};
pub use dashboard::DashboardApi;
pub use landing_page::LandingPageApi;

use crate::config::ApiConfig;
use crate::errors::ClientError;
use crate::graphql::GraphQLClient;

/// All API facades sharing one client
#[derive(Debug, Clone)]
pub struct Api {
    pub landing_page: LandingPageApi,
    pub dashboard: DashboardApi,
    pub auth: AuthApi,
}

impl Api {
    pub fn new(config: &ApiConfig, token: Option<&str>) -> Result<Self, ClientError> {
        let client = GraphQLClient::new(config, token)?;
        let base = BaseApi::new(client, ErrorClassifier::new(&config.internal_error_message));

        Ok(Self {
            landing_page: LandingPageApi::new(base.clone()),
            dashboard: DashboardApi::new(base.clone()),
            auth: AuthApi::new(base),
        })
    }
}
