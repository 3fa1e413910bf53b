//! Dish factory for creating test menu entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dish::DishFactory;
///
/// let dish = DishFactory::new(&db)
///     .name("Kung Pao Chicken")
///     .price(38)
///     .build()
///     .await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    category: String,
    img: String,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"` where id is auto-incremented
    /// - price: `10`
    /// - category: `"main"`
    /// - img: `"dish_{id}.png"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DishFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dish {}", id),
            price: 10,
            category: "main".to_string(),
            img: format!("dish_{}.png", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Builds and inserts the dish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - Created dish with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            category: ActiveValue::Set(self.category),
            img: ActiveValue::Set(self.img),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values.
///
/// Shorthand for `DishFactory::new(db).build().await`.
pub async fn create_dish(db: &DatabaseConnection) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db).build().await
}

/// Creates a dish with a specific price.
pub async fn create_dish_with_price(
    db: &DatabaseConnection,
    price: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db).price(price).build().await
}
