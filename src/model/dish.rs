use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishDto {
    pub id: i32,
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: i32,
    pub category: String,
    pub img: String,
}

/// New menu entry; the identifier is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateDishDto {
    pub name: String,
    pub price: i32,
    pub category: String,
    pub img: String,
}
