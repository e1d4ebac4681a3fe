//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.
//! - An apply failure maps to its underlying cause only when no change
//!   succeeded and every failure has the same cause; otherwise it is partial.

use jenkins_role_client::ClientError;

/// Structured exit codes for jenkins-role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid username or API token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - role-strategy endpoint or role missing.
    NotFound = 4,

    /// Validation error - bad input or a malformed server response.
    ValidationError = 5,

    /// Permission denied - the user lacks the rights to manage roles.
    PermissionDenied = 6,

    /// Some role changes were applied and others failed.
    PartialFailure = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => ExitCode::AuthenticationFailed,

            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::Forbidden(_) => ExitCode::PermissionDenied,

            ClientError::ApplyFailed {
                succeeded,
                failures,
                ..
            } => {
                let mut codes = failures.iter().map(|f| ExitCode::from(&f.error));
                match codes.next() {
                    Some(first) if succeeded.is_empty() && codes.all(|c| c == first) => first,
                    _ => ExitCode::PartialFailure,
                }
            }

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::InvalidConfig(_) | ClientError::ApiError { .. } => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
