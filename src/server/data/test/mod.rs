use crate::server::{
    data::{
        query::{Filter, Predicate},
        store::{Repository, Store},
    },
    error::data::DataError,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod get_all;
mod update;

/// Builds an unsaved dish; an id of zero asks the store to assign one.
fn new_dish(name: &str, price: i32, category: &str) -> entity::dish::Model {
    entity::dish::Model {
        id: 0,
        name: name.to_string(),
        price,
        category: category.to_string(),
        img: format!("{}.png", name.to_lowercase()),
    }
}
