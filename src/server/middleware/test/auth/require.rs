use super::*;

/// Tests that a freshly issued token passes the guard.
///
/// Expected: Ok(AuthenticatedUser) carrying the token's subject
#[test]
fn accepts_valid_token() -> Result<(), AppError> {
    let tokens = signer();
    let token = tokens.issue("alice")?;
    let headers = headers_with(&format!("Bearer {}", token));

    let user = AuthGuard::new(&tokens, &headers).require()?;

    assert_eq!(user.username(), "alice");

    Ok(())
}

/// Tests that an expired token is rejected as expired.
///
/// Expected: Err(AuthError::TokenExpired)
#[test]
fn rejects_expired_token() -> Result<(), AppError> {
    let tokens = signer();
    let token = tokens.issue_at("alice", Utc::now() - Duration::hours(3))?;
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

/// Tests that a token signed with another key is rejected.
///
/// Expected: Err(AuthError::TokenInvalid)
#[test]
fn rejects_foreign_signature() -> Result<(), AppError> {
    let tokens = signer();
    let token = TokenSigner::new(b"someone-else").issue("alice")?;
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenInvalid(_)))
    ));

    Ok(())
}

/// Tests a request without credentials.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_anonymous_request() {
    let tokens = signer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}
