use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::server::{
    credential::token::TokenSigner,
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard},
};

mod require;

fn signer() -> TokenSigner {
    TokenSigner::new(b"guard-test-secret")
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Tests extracting a bearer token from the Authorization header.
///
/// Expected: Ok(token) for `Bearer <token>`
#[test]
fn extracts_bearer_token() {
    let headers = headers_with("Bearer abc.def.ghi");

    assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
}

/// Tests headers that carry no usable token.
///
/// Expected: Err(AuthError::MissingToken) for a missing header, another scheme
/// and an empty token
#[test]
fn rejects_missing_or_foreign_scheme() {
    assert!(matches!(
        bearer_token(&HeaderMap::new()),
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        bearer_token(&headers_with("Basic dXNlcjpwdw==")),
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        bearer_token(&headers_with("Bearer ")),
        Err(AuthError::MissingToken)
    ));
}
