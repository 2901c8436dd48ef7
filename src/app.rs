//! Dashboard flows: what happens around each API call
//!
//! `DashboardApp` owns the API facades, the session token and the form
//! state. It toasts server errors, keeps field errors for the form that
//! caused them, persists the token on login and drops it on logout.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::api::Api;
use crate::config::ApiConfig;
use crate::errors::{ApiResponse, ClientError, ValidationErrorMessageBag};
use crate::models::{
    AnalyzeRequest, AuthOutput, CreateUserInput, ListOptions, LoginInput, StoreAnalyzeRequestInput,
};
use crate::notifications::{send_toast_notification, Notifier, Variant};
use crate::session::TokenStore;

pub const LOGIN_SUCCESSFUL: &str = "Login successful!";
pub const SIGN_UP_SUCCESSFUL: &str = "Sign up successful!";
pub const LOGOUT_SUCCESSFUL: &str = "You have successfully logged out";
pub const REQUEST_ADDED: &str = "Analyze request added successfully!";

/// Field errors per form, plus the last fetched request rows
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub login_errors: Option<ValidationErrorMessageBag>,
    pub sign_up_errors: Option<ValidationErrorMessageBag>,
    pub request_errors: Option<ValidationErrorMessageBag>,
    pub request_rows: Vec<AnalyzeRequest>,
}

impl DashboardState {
    fn reset_errors(&mut self) {
        self.login_errors = None;
        self.sign_up_errors = None;
        self.request_errors = None;
    }
}

pub struct DashboardApp {
    api_config: ApiConfig,
    list_options: ListOptions,
    api: Api,
    authenticated: bool,
    token_store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    state: DashboardState,
}

impl DashboardApp {
    /// Build the app, resuming a stored session when there is one
    pub async fn connect(
        api_config: ApiConfig,
        list_options: ListOptions,
        token_store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let token = token_store.load().await?;
        let api = Api::new(&api_config, token.as_deref())?;
        debug!("Dashboard connected (session={})", token.is_some());

        Ok(Self {
            api_config,
            list_options,
            api,
            authenticated: token.is_some(),
            token_store,
            notifier,
            state: DashboardState::default(),
        })
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub async fn login(&mut self, input: &LoginInput) -> Result<ApiResponse<AuthOutput>, ClientError> {
        self.state.reset_errors();

        let response = self.api.landing_page.login(input).await;
        self.toast_server_error(&response);

        if response.has_validation_errors() {
            self.state.login_errors = response.validation_errors().cloned();
            return Ok(response);
        }

        let token = response
            .data()
            .map(|output| output.token.value.clone())
            .filter(|token| !token.is_empty());

        match token {
            Some(token) if response.is_valid() => {
                self.start_session(&token).await?;
                self.toast(LOGIN_SUCCESSFUL, Variant::Success);
            }
            _ => {}
        }

        Ok(response)
    }

    pub async fn sign_up(&mut self, input: &CreateUserInput) -> ApiResponse<AuthOutput> {
        self.state.reset_errors();

        let response = self.api.landing_page.sign_up(input).await;
        self.toast_server_error(&response);

        if response.has_validation_errors() {
            self.state.sign_up_errors = response.validation_errors().cloned();
        } else if response.is_valid() {
            self.toast(SIGN_UP_SUCCESSFUL, Variant::Success);
        }

        response
    }

    pub async fn logout(&mut self) -> Result<ApiResponse<bool>, ClientError> {
        let response = self.api.auth.logout().await;

        if response.is_valid() {
            self.end_session().await?;
            self.toast(LOGOUT_SUCCESSFUL, Variant::Success);
        } else {
            send_toast_notification(self.notifier.as_ref(), response.error_title(), Variant::Error);
        }

        Ok(response)
    }

    /// Submit the analyze request form and refresh the list on success
    pub async fn submit_request(&mut self, input: &StoreAnalyzeRequestInput) -> ApiResponse<bool> {
        self.state.reset_errors();

        let response = self.api.dashboard.store_request(input).await;

        if response.is_valid() {
            self.toast(REQUEST_ADDED, Variant::Success);
            self.refresh_recent_requests().await;
        } else {
            self.toast_server_error(&response);
            self.state.request_errors = response.validation_errors().cloned();
        }

        response
    }

    pub async fn refresh_recent_requests(&mut self) -> ApiResponse<Vec<AnalyzeRequest>> {
        let response = self.api.dashboard.recent_requests(&self.list_options).await;

        match response.data() {
            Some(rows) if response.is_valid() => {
                debug!("Fetched {} recent requests", rows.len());
                self.state.request_rows = rows.clone();
            }
            _ => send_toast_notification(self.notifier.as_ref(), response.error_title(), Variant::Error),
        }

        response
    }

    /// Refresh the request list every `interval` until `shutdown` resolves
    pub async fn watch<F>(
        &mut self,
        interval: Duration,
        shutdown: F,
        mut on_refresh: impl FnMut(&[AnalyzeRequest]),
    ) where
        F: Future<Output = ()>,
    {
        let mut ticker = poll_ticker(interval);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopped watching analyze requests");
                    return;
                }
                _ = ticker.tick() => {
                    if self.refresh_recent_requests().await.is_valid() {
                        on_refresh(self.state.request_rows.as_slice());
                    }
                }
            }
        }
    }

    async fn start_session(&mut self, token: &str) -> Result<(), ClientError> {
        self.token_store.save(token).await?;
        self.api = Api::new(&self.api_config, Some(token))?;
        self.authenticated = true;
        Ok(())
    }

    async fn end_session(&mut self) -> Result<(), ClientError> {
        self.token_store.clear().await?;
        self.api = Api::new(&self.api_config, None)?;
        self.authenticated = false;
        Ok(())
    }

    /// Field errors render inline, so only server errors get a toast
    fn toast_server_error<T>(&self, response: &ApiResponse<T>) {
        if response.has_server_error() {
            send_toast_notification(self.notifier.as_ref(), response.error_title(), Variant::Error);
        }
    }

    fn toast(&self, message: &str, variant: Variant) {
        send_toast_notification(self.notifier.as_ref(), Some(message), variant);
    }
}

/// A slow refresh pushes the next poll back instead of bunching up the missed ones
fn poll_ticker(interval: Duration) -> Interval {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
