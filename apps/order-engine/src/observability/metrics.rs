//! Prometheus metrics for the order engine.
//!
//! Counters cover coordinator runs and per-record submission outcomes;
//! worker results are otherwise only visible through status changes, so
//! these are the operational signal for failed orders.

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with a custom address.
    #[must_use]
    pub const fn with_addr(addr: SocketAddr) -> Self {
        Self { listen_addr: addr }
    }
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the exporter fails to start (e.g., port already in
/// use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Record one coordinator run and the number of tasks it dispatched.
pub fn record_dispatch_run(dispatched: usize) {
    counter!("order_engine_dispatch_runs_total").increment(1);
    counter!("order_engine_dispatched_tasks_total").increment(dispatched as u64);
}

/// Record the outcome of one submission attempt.
///
/// `outcome` is one of `complete`, `failed`, or `skipped`.
pub fn record_submission_outcome(outcome: &'static str) {
    counter!("order_engine_submissions_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr() {
        let config = MetricsConfig::default();
        assert_eq!(config.listen_addr.port(), 9090);
    }

    #[test]
    fn with_addr_overrides_listener() {
        let addr: SocketAddr = "127.0.0.1:9191".parse().unwrap();
        let config = MetricsConfig::with_addr(addr);
        assert_eq!(config.listen_addr, addr);
    }

    #[test]
    fn recorders_are_callable_without_exporter() {
        // With no recorder installed these are no-ops.
        record_dispatch_run(3);
        record_submission_outcome("complete");
        record_submission_outcome("failed");
    }
}
