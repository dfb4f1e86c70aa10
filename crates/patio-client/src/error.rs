//! Error taxonomy for calls against the parking service.

use thiserror::Error;

/// Failure modes for auth and vehicle operations.
///
/// None of these are fatal to the process: auth failures are recoverable by
/// re-login, and every failure leaves the session in a well-defined state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials rejected or token invalid/expired. Carries the server's
    /// own message when it sent one.
    #[error("{0}")]
    Auth(String),

    /// The service was unreachable or timed out.
    #[error("could not reach the parking service: {0}")]
    Connectivity(#[from] reqwest::Error),

    /// The service answered with a status or body we do not understand.
    #[error("unexpected response from the parking service: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Whether re-authenticating could resolve this error.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}
