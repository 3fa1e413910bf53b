//! Order line factory for creating submitted order history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order lines.
///
/// The referenced dish must already exist; foreign keys are enforced by SQLite.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order_line::OrderLineFactory;
///
/// let old = OrderLineFactory::new(&db, dish.id)
///     .count(2)
///     .created_at(Utc::now() - chrono::Duration::days(40))
///     .build()
///     .await?;
/// ```
pub struct OrderLineFactory<'a> {
    db: &'a DatabaseConnection,
    dish_id: i32,
    count: i32,
    created_at: DateTime<Utc>,
}

impl<'a> OrderLineFactory<'a> {
    /// Creates a new OrderLineFactory with default values.
    ///
    /// Defaults:
    /// - count: `1`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `dish_id` - ID of an existing dish
    pub fn new(db: &'a DatabaseConnection, dish_id: i32) -> Self {
        Self {
            db,
            dish_id,
            count: 1,
            created_at: Utc::now(),
        }
    }

    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Sets the submission timestamp, used to create rows past the retention window.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order line entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order_line::Model)` - Created order line
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown dish)
    pub async fn build(self) -> Result<entity::order_line::Model, DbErr> {
        entity::order_line::ActiveModel {
            id: ActiveValue::NotSet,
            dish_id: ActiveValue::Set(self.dish_id),
            count: ActiveValue::Set(self.count),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order line for `dish_id` with the given count, stamped now.
pub async fn create_order_line(
    db: &DatabaseConnection,
    dish_id: i32,
    count: i32,
) -> Result<entity::order_line::Model, DbErr> {
    OrderLineFactory::new(db, dish_id).count(count).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::dish::create_dish};

    #[tokio::test]
    async fn creates_order_line_for_dish() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let dish = create_dish(db).await?;
        let line = create_order_line(db, dish.id, 4).await?;

        assert_eq!(line.dish_id, dish.id);
        assert_eq!(line.count, 4);

        Ok(())
    }

    #[tokio::test]
    async fn keeps_custom_timestamp() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let dish = create_dish(db).await?;
        let stamp = Utc::now() - chrono::Duration::days(45);
        let line = OrderLineFactory::new(db, dish.id)
            .created_at(stamp)
            .build()
            .await?;

        assert_eq!(line.created_at.timestamp(), stamp.timestamp());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_dish() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_order_line(db, 999, 1).await;

        assert!(result.is_err());

        Ok(())
    }
}
