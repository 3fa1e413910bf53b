use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    credential::{claims::Claims, token::TokenSigner},
    error::{auth::AuthError, AppError},
};

/// Identity established from a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl AuthenticatedUser {
    pub fn username(&self) -> &str {
        &self.claims.sub
    }
}

/// Guard for routes that need a signed-in caller.
///
/// Roles are not checked: any valid token grants access.
pub struct AuthGuard<'a> {
    tokens: &'a TokenSigner,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenSigner, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Validates the request's bearer token.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Token present, correctly signed and unexpired
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::TokenInvalid)` / `Err(AuthError::TokenExpired)` - Token rejected
    pub fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let token = bearer_token(self.headers)?;

        let claims = self.tokens.validate(token)?;

        Ok(AuthenticatedUser { claims })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
