use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dish::{CreateDishDto, DishDto},
    },
    server::{
        error::{data::DataError, AppError},
        middleware::auth::AuthGuard,
        model::dish::Dish,
        service::{dish::DishService, ranking::RankingService},
        state::AppState,
        util::payload::Payload,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// Add a dish to the menu.
///
/// Any id in the body is ignored; the store assigns one.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The stored dish with its id
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/add_dish",
    tag = DISH_TAG,
    request_body = CreateDishDto,
    responses(
        (status = 200, description = "Dish created", body = DishDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require()?;

    let service = DishService::new(&state.store);

    let dish = service.create(Dish::from_create_dto(payload)).await?;

    tracing::info!("{} added dish {} ({})", caller.username(), dish.id, dish.name);

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Get one dish by id.
///
/// # Returns
/// - `200 OK` - The dish
/// - `400 Bad Request` - Id is not a number
/// - `404 Not Found` - No dish with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/get_dish/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish found", body = DishDto),
        (status = 400, description = "Id is not a number", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let service = DishService::new(&state.store);

    let dish = service.get(id).await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Get the whole menu.
///
/// # Returns
/// - `200 OK` - Every dish, possibly none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/get_dishes",
    tag = DISH_TAG,
    responses(
        (status = 200, description = "All dishes", body = Vec<DishDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.store);

    let dishes = service.get_all().await?;

    let dishes_dto: Vec<DishDto> = dishes.into_iter().map(Dish::into_dto).collect();

    Ok((StatusCode::OK, Json(dishes_dto)))
}

/// Get the dishes in one category.
///
/// # Returns
/// - `200 OK` - Matching dishes, empty for an unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/get_dishes_by_category/{category}",
    tag = DISH_TAG,
    params(
        ("category" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Dishes in the category", body = Vec<DishDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.store);

    let dishes = service.get_by_category(&category).await?;

    let dishes_dto: Vec<DishDto> = dishes.into_iter().map(Dish::into_dto).collect();

    Ok((StatusCode::OK, Json(dishes_dto)))
}

/// Get the most ordered dishes.
///
/// # Returns
/// - `200 OK` - Up to six dishes, most ordered first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/get_hot_dishes",
    tag = DISH_TAG,
    responses(
        (status = 200, description = "Most ordered dishes", body = Vec<DishDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hot_dishes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RankingService::new(&state.store);

    let dishes = service.hot_dishes().await?;

    let dishes_dto: Vec<DishDto> = dishes.into_iter().map(Dish::into_dto).collect();

    Ok((StatusCode::OK, Json(dishes_dto)))
}

/// Replace every field of a dish.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `204 No Content` - Dish updated
/// - `400 Bad Request` - Malformed body or missing id
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No dish with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/admin/update_dish",
    tag = DISH_TAG,
    request_body = DishDto,
    responses(
        (status = 204, description = "Dish updated"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<DishDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require()?;

    let service = DishService::new(&state.store);

    let dish = service.update(Dish::from_dto(payload)).await?;

    tracing::info!("{} updated dish {}", caller.username(), dish.id);

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a dish and its order history.
///
/// Deleting a dish that does not exist succeeds.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `204 No Content` - Dish removed or already absent
/// - `400 Bad Request` - Id is not a number
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/admin/delete_dish/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish id")
    ),
    responses(
        (status = 204, description = "Dish removed"),
        (status = 400, description = "Id is not a number", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require()?;

    let id = parse_id(&id)?;

    let service = DishService::new(&state.store);

    service.delete(id).await?;

    tracing::info!("{} deleted dish {}", caller.username(), id);

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<i32, DataError> {
    raw.parse::<i32>()
        .map_err(|_| DataError::Validation(format!("Invalid dish id: {}", raw)))
}
