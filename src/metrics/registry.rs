use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};

lazy_static! {
    pub static ref GRAPHQL_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "graphql_operations_total",
        "Total GraphQL operations sent to the API",
        &["operation"]
    )
    .unwrap();

    pub static ref GRAPHQL_OPERATION_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "graphql_operation_failures_total",
        "Total failed GraphQL operations",
        &["operation", "kind"]  // kind: validation, server, transport
    )
    .unwrap();

    pub static ref GRAPHQL_OPERATION_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "graphql_operation_duration_seconds",
        "GraphQL operation round trip in seconds",
        &["operation"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .unwrap();
}

/// Initialize all metrics (called on startup)
pub fn init_metrics() {
    // Force lazy_static initialization
    lazy_static::initialize(&GRAPHQL_OPERATIONS_TOTAL);
    lazy_static::initialize(&GRAPHQL_OPERATION_FAILURES_TOTAL);
    lazy_static::initialize(&GRAPHQL_OPERATION_DURATION_SECONDS);
}
