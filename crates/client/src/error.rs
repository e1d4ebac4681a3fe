//! Error types for the Jenkins role client.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::models::{ApplyMode, RoleAssignment};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during role client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Required client configuration was missing.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller supplied an unusable argument (e.g. an empty user id).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP transport error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Could not connect to the server.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// HTTP 401: credentials rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403: credentials lack the required permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// HTTP 404: usually the role-strategy plugin is missing or the base URL is wrong.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body could not be read or decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// One or more role changes failed while applying a role set.
    #[error(
        "Failed to {mode} {} of {} role(s): {}",
        .failures.len(),
        .failures.len() + .succeeded.len(),
        .failures.first().map(|f| f.to_string()).unwrap_or_default()
    )]
    ApplyFailed {
        mode: ApplyMode,
        succeeded: Vec<RoleAssignment>,
        failures: Vec<RoleCallFailure>,
    },
}

/// A single failed role change inside [`ClientError::ApplyFailed`].
#[derive(Debug)]
pub struct RoleCallFailure {
    pub assignment: RoleAssignment,
    pub error: ClientError,
}

impl fmt::Display for RoleCallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.assignment, self.error)
    }
}

/// Coarse error classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Could not reach the server (connect, timeout, transport).
    Network,
    /// Credentials rejected or insufficient.
    Auth,
    /// Server reached but answered with a failure status.
    Server,
    /// Server answered but the body was not what we expected.
    MalformedResponse,
    /// Bad client-side input or configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns the string label for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Server => "server",
            Self::MalformedResponse => "malformed_response",
            Self::Configuration => "configuration",
        }
    }
}

impl ClientError {
    /// Classify the error.
    ///
    /// An `ApplyFailed` error takes the category of its first failure.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUrl(_) | Self::InvalidConfig(_) | Self::InvalidRequest(_) => {
                ErrorCategory::Configuration
            }
            Self::HttpError(e) if e.is_decode() => ErrorCategory::MalformedResponse,
            Self::HttpError(e) if e.is_builder() => ErrorCategory::Configuration,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionRefused(_) => {
                ErrorCategory::Network
            }
            Self::Unauthorized(_) | Self::Forbidden(_) => ErrorCategory::Auth,
            Self::NotFound(_) | Self::ApiError { .. } => ErrorCategory::Server,
            Self::InvalidResponse(_) => ErrorCategory::MalformedResponse,
            Self::ApplyFailed { failures, .. } => failures
                .first()
                .map(|f| f.error.category())
                .unwrap_or(ErrorCategory::Server),
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.category() == ErrorCategory::Auth
    }

    /// Map a non-success HTTP status to an error.
    pub(crate) fn from_status(status: u16, url: String, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(format!("{url}: {message}")),
            403 => Self::Forbidden(format!("{url}: {message}")),
            404 => Self::NotFound(url),
            _ => Self::ApiError {
                status,
                url,
                message,
            },
        }
    }

    /// Map a transport-level reqwest error to the most specific variant.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionRefused(url.to_string())
        } else {
            Self::HttpError(err)
        }
    }
}
