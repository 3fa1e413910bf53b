use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One requested line of an order.
///
/// Only the dish reference and quantity are read; any price a client sends is
/// ignored and the stored price is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub dish_id: i32,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TotalPriceDto {
    pub total_price: i64,
}

/// A stored order line, as listed by the admin record view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineDto {
    pub id: i32,
    pub dish_id: i32,
    pub count: i32,
    pub created_at: DateTime<Utc>,
}
