// Library exports for testing
pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod message_bag;
pub mod metrics;
pub mod models;
pub mod notifications;
pub mod session;
pub mod utils;
