pub mod registry;

use anyhow::{Context, Result};
use prometheus::{Encoder, TextEncoder};

/// Render all registered metrics in the Prometheus exposition format
pub fn encode_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .context("Failed to encode metrics")?;

    String::from_utf8(buffer).context("Metrics output was not valid UTF-8")
}

// Re-export commonly used metrics for convenience
pub use registry::{
    GRAPHQL_OPERATIONS_TOTAL, GRAPHQL_OPERATION_DURATION_SECONDS, GRAPHQL_OPERATION_FAILURES_TOTAL,
};
