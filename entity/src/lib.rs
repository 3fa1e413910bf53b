//! SeaORM entity models for the restaurant backend.

pub mod prelude;

pub mod dish;
pub mod order_line;
pub mod user;
