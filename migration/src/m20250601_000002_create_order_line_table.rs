use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_dish_table::Dish;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLine::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLine::Id))
                    .col(integer(OrderLine::DishId))
                    .col(integer(OrderLine::Count))
                    .col(timestamp_with_time_zone(OrderLine::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_dish_id")
                            .from(OrderLine::Table, OrderLine::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The retention sweep filters on created_at.
        manager
            .create_index(
                Index::create()
                    .name("idx_order_line_created_at")
                    .table(OrderLine::Table)
                    .col(OrderLine::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderLine {
    Table,
    Id,
    DishId,
    Count,
    CreatedAt,
}
