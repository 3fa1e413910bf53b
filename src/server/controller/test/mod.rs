use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    credential::token::TokenSigner, data::store::Store, router::router, state::AppState,
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod user;

const SECRET: &[u8] = b"controller-test-secret";

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(
        Store::new(db.clone()),
        TokenSigner::new(SECRET),
        Duration::from_secs(5),
    ))
}

fn bearer() -> String {
    let token = TokenSigner::new(SECRET).issue("admin").unwrap();
    format!("Bearer {token}")
}

fn request(method: Method, uri: &str, body: Option<Value>, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and returns the status with the body parsed as JSON, or
/// `Value::Null` for an empty body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Tests a path no route matches.
///
/// Expected: 404 with a JSON error body
#[tokio::test]
async fn unknown_path_is_json_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), request(Method::GET, "/api/nothing", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");

    Ok(())
}

/// Tests a known path with the wrong method.
///
/// Expected: 405 with a JSON error body
#[tokio::test]
async fn wrong_method_is_json_method_not_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        request(Method::DELETE, "/api/get_dishes", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    Ok(())
}

/// Tests the generated OpenAPI document route.
///
/// Expected: 200 listing the order submission path and the bearer scheme
#[tokio::test]
async fn serves_openapi_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        request(Method::GET, crate::server::router::OPENAPI_PATH, None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/submit_order"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());

    Ok(())
}
