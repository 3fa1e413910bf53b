//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships, so an
//! order line can be created from nothing more than a dish.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let dish = factory::dish::create_dish(&db).await?;
//!     let line = factory::order_line::create_order_line(&db, dish.id, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dish = factory::dish::DishFactory::new(&db)
//!     .name("Mapo Tofu")
//!     .price(50)
//!     .category("hot")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `dish` - Create menu entries
//! - `order_line` - Create submitted order lines, optionally back-dated
//! - `user` - Create user accounts with a pre-computed password hash
//! - `helpers` - ID generation shared by the factories

pub mod dish;
pub mod helpers;
pub mod order_line;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use dish::create_dish;
pub use order_line::create_order_line;
pub use user::create_user;
