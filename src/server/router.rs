//! Route table, fallbacks, CORS and the OpenAPI document.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::Response,
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::Url;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{dish, order, user},
    error::error_response,
    state::AppState,
};

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// How long browsers may cache a preflight response.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant API"),
    modifiers(&BearerSecurity),
    tags(
        (name = "dish", description = "Menu management and hot dishes"),
        (name = "order", description = "Order submission and pricing"),
        (name = "user", description = "Registration and session tokens"),
    )
)]
struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::new);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(dish::add_dish))
        .routes(routes!(dish::get_dish))
        .routes(routes!(dish::get_dishes))
        .routes(routes!(dish::get_dishes_by_category))
        .routes(routes!(dish::get_hot_dishes))
        .routes(routes!(dish::update_dish))
        .routes(routes!(dish::delete_dish))
        .routes(routes!(order::submit_order))
        .routes(routes!(order::get_total_price))
        .routes(routes!(order::get_records))
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .routes(routes!(user::refresh))
        .split_for_parts();

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found".to_string())
}

async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed".to_string(),
    )
}

/// CORS policy admitting browser requests only from `allowed_origins`.
///
/// Origins are compared by scheme, host and port after URL parsing, so
/// `http://localhost:5173` and `http://localhost:5173/` are the same origin.
/// Requests without an `Origin` header are not affected by CORS at all.
pub fn cors_layer(allowed_origins: Vec<Url>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin_allowed(origin, &allowed_origins)
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

fn origin_allowed(origin: &HeaderValue, allowed_origins: &[Url]) -> bool {
    let Some(origin) = origin.to_str().ok().and_then(|raw| Url::parse(raw).ok()) else {
        return false;
    };

    allowed_origins.iter().any(|allowed| {
        allowed.scheme() == origin.scheme()
            && allowed.host_str() == origin.host_str()
            && allowed.port_or_known_default() == origin.port_or_known_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<Url> {
        vec![
            Url::parse("http://127.0.0.1:5173").unwrap(),
            Url::parse("http://localhost:5173").unwrap(),
        ]
    }

    #[test]
    fn matches_configured_origins() {
        assert!(origin_allowed(
            &HeaderValue::from_static("http://localhost:5173"),
            &allowed()
        ));
        assert!(origin_allowed(
            &HeaderValue::from_static("http://127.0.0.1:5173"),
            &allowed()
        ));
    }

    #[test]
    fn rejects_other_ports_schemes_and_hosts() {
        for origin in [
            "http://localhost:3000",
            "https://localhost:5173",
            "http://evil.example:5173",
            "not a url",
        ] {
            assert!(
                !origin_allowed(&HeaderValue::from_static(origin), &allowed()),
                "{origin} should be rejected"
            );
        }
    }
}
