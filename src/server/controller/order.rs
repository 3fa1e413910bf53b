use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{OrderItemDto, OrderLineDto, TotalPriceDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{OrderItem, OrderLine},
        service::order::OrderService,
        state::AppState,
        util::payload::Payload,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Submit an order.
///
/// The whole batch is rejected if any count is not positive or any dish is
/// unknown. After the lines are stored, order history older than one month is
/// swept.
///
/// # Returns
/// - `200 OK` - Order stored
/// - `400 Bad Request` - Malformed body or a non-positive count
/// - `404 Not Found` - Unknown dish
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/submit_order",
    tag = ORDER_TAG,
    request_body = Vec<OrderItemDto>,
    responses(
        (status = 200, description = "Order stored", body = MessageDto),
        (status = 400, description = "Malformed body or non-positive count", body = ErrorDto),
        (status = 404, description = "Unknown dish", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_order(
    State(state): State<AppState>,
    Payload(payload): Payload<Vec<OrderItemDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.store, state.sweep_timeout);

    let items = payload.into_iter().map(OrderItem::from_dto).collect();

    let report = service.submit(items).await?;

    tracing::info!("Stored order with {} lines", report.lines.len());

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Order submitted".to_string(),
        }),
    ))
}

/// Price an order without storing it.
///
/// Prices come from the menu; any price in the request is ignored.
///
/// # Returns
/// - `200 OK` - Total price
/// - `400 Bad Request` - Malformed body or a non-positive count
/// - `404 Not Found` - Unknown dish
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/get_total_price",
    tag = ORDER_TAG,
    request_body = Vec<OrderItemDto>,
    responses(
        (status = 200, description = "Total price", body = TotalPriceDto),
        (status = 400, description = "Malformed body or non-positive count", body = ErrorDto),
        (status = 404, description = "Unknown dish", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_total_price(
    State(state): State<AppState>,
    Payload(payload): Payload<Vec<OrderItemDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.store, state.sweep_timeout);

    let items: Vec<OrderItem> = payload.into_iter().map(OrderItem::from_dto).collect();

    let total_price = service.total_price(&items).await?;

    Ok((StatusCode::OK, Json(TotalPriceDto { total_price })))
}

/// List stored order lines.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - Every stored order line
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/get_records",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Stored order lines", body = Vec<OrderLineDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_records(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require()?;

    let service = OrderService::new(&state.store, state.sweep_timeout);

    let records = service.get_records().await?;

    tracing::debug!("{} listed {} order lines", caller.username(), records.len());

    let records_dto: Vec<OrderLineDto> = records.into_iter().map(OrderLine::into_dto).collect();

    Ok((StatusCode::OK, Json(records_dto)))
}
