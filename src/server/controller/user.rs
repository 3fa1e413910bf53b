use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterUserDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::bearer_token,
        model::user::{RegisterUserParams, DEFAULT_ROLE},
        service::user::UserService,
        state::AppState,
        util::payload::Payload,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register an account.
///
/// # Returns
/// - `200 OK` - The created account, without its password
/// - `400 Bad Request` - Malformed body, empty credentials or username taken
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Account created", body = UserDto),
        (status = 400, description = "Malformed body or username taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Payload(payload): Payload<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.store, &state.tokens);

    let user = service
        .register(RegisterUserParams {
            username: payload.username,
            password: payload.password,
            role: payload.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in and receive a session token.
///
/// # Returns
/// - `200 OK` - Session token
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown username or wrong password (same body for both)
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.store, &state.tokens);

    let token = service.login(&payload.username, payload.password).await?;

    tracing::info!("User {} logged in", payload.username);

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Exchange a session token for a fresh one.
///
/// Before the token's refresh point the same token is returned.
///
/// # Returns
/// - `200 OK` - Current or renewed token
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    post,
    path = "/api/user/refresh",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current or renewed token", body = TokenDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let presented = bearer_token(&headers)?;

    let service = UserService::new(&state.store, &state.tokens);

    let token = service.refresh(presented).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
