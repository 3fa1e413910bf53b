use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

/// Message returned for every failed login, whether the username exists or not.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch.
    ///
    /// Both causes share one variant and one response body so callers cannot
    /// probe which usernames exist. Results in 401 Unauthorized.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request to a protected route carried no bearer token.
    ///
    /// Results in 401 Unauthorized.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature mismatch or malformed envelope.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid session token: {0}")]
    TokenInvalid(String),

    /// Token signature is valid but the absolute expiry has passed.
    ///
    /// Results in 401 Unauthorized.
    #[error("Session token expired")]
    TokenExpired,

    /// Password hashing failed.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    /// Token signing failed.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Failed to sign session token: {0}")]
    Signing(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All client-facing messages are generic; details are logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For credential and token failures
/// - 500 Internal Server Error - For hashing and signing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ),
            Self::MissingToken | Self::TokenInvalid(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::TokenExpired => error_response(
                StatusCode::UNAUTHORIZED,
                "Session expired, please log in again".to_string(),
            ),
            Self::Hashing(_) | Self::Signing(_) => {
                tracing::error!("{}", self);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
