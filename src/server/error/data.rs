use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use super::error_response;

/// Closed taxonomy of store failures.
///
/// Every `DbErr` produced by the repository layer is classified into one of these
/// kinds by [`DataError::from_db`] before it leaves the data layer.
#[derive(Error, Debug)]
pub enum DataError {
    /// Caller input is malformed or violates a business rule.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// No row matched the filter or primary key.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint rejected the write.
    ///
    /// Results in 400 Bad Request, the status the public API promises for
    /// duplicate usernames.
    #[error("{0}")]
    Conflict(String),

    /// Any other backend failure (connectivity, constraint, decoding).
    ///
    /// Results in 500 Internal Server Error; the cause is logged, never returned.
    #[error("Persistence error: {0}")]
    Persistence(#[source] DbErr),
}

impl DataError {
    /// Classifies a raw SeaORM error.
    ///
    /// The mapping is total: anything not recognised as "no row" or a unique
    /// violation becomes `Persistence`.
    pub fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return Self::Conflict(detail);
        }

        match err {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            DbErr::RecordNotUpdated => Self::NotFound("No record matched the update".to_string()),
            err => Self::Persistence(err),
        }
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => {
                error_response(status, msg)
            }
            Self::Persistence(err) => {
                tracing::error!("Persistence error: {}", err);
                error_response(status, "Internal server error".to_string())
            }
        }
    }
}
