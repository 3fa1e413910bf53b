//! Order domain models.

use chrono::{DateTime, Utc};

use crate::model::order::{OrderItemDto, OrderLineDto};

/// A requested (dish, quantity) pair, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub dish_id: i32,
    pub count: i32,
}

impl OrderItem {
    pub fn from_dto(dto: OrderItemDto) -> Self {
        Self {
            dish_id: dto.dish_id,
            count: dto.count,
        }
    }
}

/// A stored order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i32,
    pub dish_id: i32,
    pub count: i32,
    pub created_at: DateTime<Utc>,
}

impl OrderLine {
    pub fn from_entity(entity: entity::order_line::Model) -> Self {
        Self {
            id: entity.id,
            dish_id: entity.dish_id,
            count: entity.count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> OrderLineDto {
        OrderLineDto {
            id: self.id,
            dish_id: self.dish_id,
            count: self.count,
            created_at: self.created_at,
        }
    }
}
