//! Auth errors.

use thiserror::Error;

/// Classified outcome of a failed token validation.
#[derive(Debug, Error)]
pub enum AuthValidationError {
    #[error("access token is missing, invalid, or expired")]
    InvalidToken,

    #[error("access token is not allowed to perform this operation")]
    Forbidden,

    #[error("auth service unavailable")]
    Unavailable(#[from] AuthClientError),
}

/// Errors that can occur when communicating with the auth service.
#[derive(Debug, Error)]
pub enum AuthClientError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The auth service answered with a status outside its contract.
    #[error("unexpected response from auth service: {0}")]
    UnexpectedResponse(String),
}
