//! JSON body extractor with the application's error shape.
//!
//! `axum::Json` rejects malformed bodies with a plain-text response; `Payload`
//! turns the same rejection into a `DataError::Validation`, so clients always
//! receive `{"error": ...}` with status 400.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::data::DataError;

pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = DataError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                Err(DataError::Validation(format!(
                    "Malformed request body: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}
