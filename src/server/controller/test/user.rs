use serde_json::json;

use super::*;
use crate::server::error::auth::INVALID_CREDENTIALS_MESSAGE;

async fn register(db: &DatabaseConnection, username: &str, password: &str) -> StatusCode {
    let body = json!({ "username": username, "password": password });
    let (status, _) = send(
        app(db),
        request(Method::POST, "/api/user/register", Some(body), None),
    )
    .await;
    status
}

/// Tests registering then logging in over HTTP.
///
/// Expected: 200 with the account (no password field), then 200 with a token
#[tokio::test]
async fn register_then_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let body = json!({ "username": "alice", "password": "pa55word" });
    let (status, body) = send(
        app(db),
        request(Method::POST, "/api/user/register", Some(body), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "user");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let body = json!({ "username": "alice", "password": "pa55word" });
    let (status, body) = send(
        app(db),
        request(Method::POST, "/api/user/login", Some(body), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));

    Ok(())
}

/// Tests registering a taken username.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn duplicate_username_is_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(register(db, "bob", "first").await, StatusCode::OK);
    assert_eq!(register(db, "bob", "second").await, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests login failures for an unknown user and a wrong password.
///
/// Expected: 401 with byte-identical bodies for both
#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    assert_eq!(register(db, "carol", "right").await, StatusCode::OK);

    let wrong_password = json!({ "username": "carol", "password": "wrong" });
    let (wrong_status, wrong_body) = send(
        app(db),
        request(Method::POST, "/api/user/login", Some(wrong_password), None),
    )
    .await;

    let unknown_user = json!({ "username": "nobody", "password": "wrong" });
    let (unknown_status, unknown_body) = send(
        app(db),
        request(Method::POST, "/api/user/login", Some(unknown_user), None),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], INVALID_CREDENTIALS_MESSAGE);

    Ok(())
}

/// Tests refreshing a fresh token for an existing user.
///
/// Expected: 200 returning the same token, since its refresh point has not passed
#[tokio::test]
async fn refresh_returns_current_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let token = TokenSigner::new(SECRET).issue(&user.username).unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::POST,
            "/api/user/refresh",
            None,
            Some(&format!("Bearer {token}")),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], token);

    Ok(())
}

/// Tests refreshing without a token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn refresh_requires_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(app(db), request(Method::POST, "/api/user/refresh", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}
