use serde_json::json;
use tracing::info;

use super::base::BaseApi;
use crate::errors::ApiResponse;
use crate::graphql::queries::{ANALYZE_REQUESTS, STORE_ANALYZE_REQUEST};
use crate::models::{AnalyzeRequest, ListOptions, StoreAnalyzeRequestInput};

#[derive(Debug, Clone)]
pub struct DashboardApi {
    base: BaseApi,
}

impl DashboardApi {
    pub fn new(base: BaseApi) -> Self {
        Self { base }
    }

    /// Submit a new analyze request
    ///
    /// A travel history file goes out as a multipart upload; credentials are
    /// sent as a plain JSON request.
    pub async fn store_request(&self, input: &StoreAnalyzeRequestInput) -> ApiResponse<bool> {
        info!(
            "Storing analyze request for card {} ({} to {})",
            input.ov_chipkaart_number, input.start_date, input.end_date
        );

        let variables = input.to_variables();
        match input.upload() {
            Some(upload) => {
                self.base
                    .run_with_upload(
                        &STORE_ANALYZE_REQUEST,
                        variables,
                        "input.travelHistoryFile",
                        upload.clone(),
                    )
                    .await
            }
            None => {
                self.base.run(&STORE_ANALYZE_REQUEST, variables).await
            }
        }
    }

    /// The newest analyze requests of the signed-in user
    pub async fn recent_requests(&self, options: &ListOptions) -> ApiResponse<Vec<AnalyzeRequest>> {
        self.base
            .run(&ANALYZE_REQUESTS, json!(options))
            .await
    }
}
