//! Single-shot request execution with status and transport error mapping.
//!
//! Role-strategy calls are never retried: every request is sent exactly once
//! and its outcome is turned into a typed result.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Longest error body excerpt kept in an `ApiError` message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Sends an HTTP request and maps failures to [`ClientError`].
///
/// - Transport failures become `Timeout`, `ConnectionRefused` or `HttpError`.
/// - Non-2xx statuses become `Unauthorized`, `Forbidden`, `NotFound` or `ApiError`.
///
/// `endpoint` and `method` are used for logging and metrics labels only.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = builder.send().await;
    let elapsed = start.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let url = e.url().map(|u| u.to_string()).unwrap_or_else(|| endpoint.to_string());
            let err = ClientError::from_transport(e, &url, timeout);
            debug!(endpoint, method, error = %err, "Request failed before a response");
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
                m.record_client_error(endpoint, method, &err);
            }
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, Some(status));
    }

    if response.status().is_success() {
        debug!(endpoint, method, status, elapsed_ms = elapsed.as_millis() as u64, "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let err = ClientError::from_status(status, url, truncate_body(body.trim()));

    debug!(endpoint, method, status, "Request returned failure status");
    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }

    Err(err)
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut out: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short() {
        assert_eq!(truncate_body("Forbidden"), "Forbidden");
    }

    #[test]
    fn test_truncate_body_long() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let out = truncate_body(&body);
        assert_eq!(out.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(out.ends_with("..."));
    }
}
