use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub graphql_url: String,
    pub locale: String,
    pub origin: String,
    pub internal_error_message: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub token_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub recent_requests_take: u32,
    pub poll_interval_seconds: u64,
}

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl ApiConfig {
    pub fn new(graphql_url: impl Into<String>) -> Self {
        Self {
            graphql_url: graphql_url.into(),
            locale: DEFAULT_LOCALE.to_string(),
            origin: "http://localhost:3000".to_string(),
            internal_error_message: DEFAULT_INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_requests_take: 10,
            poll_interval_seconds: 5,
        }
    }
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config {
            api: ApiConfig {
                graphql_url: env::var("GRAPHQL_SERVER_URL")
                    .context("GRAPHQL_SERVER_URL must be set")?,
                locale: env::var("LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string()),
                origin: env::var("ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string()),
                internal_error_message: env::var("INTERNAL_SERVER_ERROR_MESSAGE")
                    .unwrap_or_else(|_| DEFAULT_INTERNAL_ERROR_MESSAGE.to_string()),
            },
            session: SessionConfig {
                token_file: env::var("TOKEN_FILE")
                    .unwrap_or_else(|_| ".ov-dashboard-token".to_string())
                    .into(),
            },
            dashboard: DashboardConfig {
                recent_requests_take: env::var("RECENT_REQUESTS_TAKE")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("RECENT_REQUESTS_TAKE must be a valid number")?,
                poll_interval_seconds: env::var("POLL_INTERVAL_SECONDS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("POLL_INTERVAL_SECONDS must be a valid number")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.api.graphql_url.starts_with("http://") && !self.api.graphql_url.starts_with("https://") {
            bail!("GRAPHQL_SERVER_URL must be an http(s) URL");
        }
        if self.dashboard.poll_interval_seconds == 0 {
            bail!("POLL_INTERVAL_SECONDS must be greater than zero");
        }
        Ok(())
    }
}
