//! Prometheus exposition for the metrics recorded by [`MetricsCollector`].
//!
//! Installs `metrics-exporter-prometheus` as the global recorder and serves
//! the Prometheus text format at `/metrics` on the given address.
//!
//! [`MetricsCollector`]: crate::metrics::MetricsCollector

use std::net::SocketAddr;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

/// Request latency buckets, in seconds.
const REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Handle for an installed Prometheus exporter.
///
/// The recorder is process-global; the HTTP listener lives until exit.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the exporter as the global recorder and start its listener.
    ///
    /// # Errors
    /// Fails when `bind_addr` is not a socket address, when the recorder
    /// cannot be built, or when another recorder is already installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_DURATION_BUCKETS,
            )?
            .with_http_listener(addr)
            .install_recorder()
            .map_err(|_| MetricsExporterError::RecorderAlreadyInstalled)?;

        info!(%addr, "Prometheus metrics exporter listening on /metrics");

        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors from [`MetricsExporter::install`].
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus recorder: {0}")]
    BuildError(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
