use std::time::Duration;

use crate::server::{
    data::store::Store,
    error::{auth::AuthError, data::DataError, AppError},
    model::order::OrderItem,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod order;

const SWEEP_TIMEOUT: Duration = Duration::from_secs(5);

fn item(dish_id: i32, count: i32) -> OrderItem {
    OrderItem { dish_id, count }
}
