//! Metrics collection for role-strategy API calls.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see `metrics_exporter`)
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and zero-cost when no recorder is installed

use std::time::Duration;

use crate::error::ClientError;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "jenkins_role_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "jenkins_role_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "jenkins_role_errors_total";

/// Metric name for applied role change counter.
pub const METRIC_ROLE_CHANGES_TOTAL: &str = "jenkins_role_changes_total";

/// Thin wrapper around the `metrics` macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record the duration of a request.
    ///
    /// `status` is None when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record an error, labelled with its category.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => error.category().as_str(),
        )
        .increment(1);
    }

    /// Record one successful role change.
    pub fn record_role_change(&self, mode: &'static str, category: &'static str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ROLE_CHANGES_TOTAL,
            "mode" => mode,
            "category" => category,
        )
        .increment(1);
    }
}
