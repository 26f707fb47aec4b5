//! Observability - metrics for dispatch and submission activity.

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_dispatch_run, record_submission_outcome,
};
