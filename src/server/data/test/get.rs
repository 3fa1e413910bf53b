use super::*;

/// Tests fetching a row by a non-key column.
///
/// Expected: Ok(model) whose name matches the filter
#[tokio::test]
async fn finds_row_by_equality() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    factory::dish::DishFactory::new(db)
        .name("Fried Rice")
        .build()
        .await?;
    let target = factory::dish::DishFactory::new(db)
        .name("Hot Pot")
        .build()
        .await?;

    let fetched = repo
        .get(Filter::new().eq(entity::dish::Column::Name, "Hot Pot"))
        .await
        .unwrap();

    assert_eq!(fetched, target);

    Ok(())
}

/// Tests that every equality in the filter must hold.
///
/// Expected: Err(DataError::NotFound) when one clause does not match
#[tokio::test]
async fn all_clauses_must_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    let dish = factory::dish::DishFactory::new(db)
        .category("soup")
        .build()
        .await?;

    let result = repo
        .get(
            Filter::new()
                .eq(entity::dish::Column::Id, dish.id)
                .eq(entity::dish::Column::Category, "dessert"),
        )
        .await;

    assert!(matches!(result, Err(DataError::NotFound(_))));

    Ok(())
}

/// Tests fetching an identifier that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn missing_row_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    let result = repo
        .get(Filter::new().eq(entity::dish::Column::Id, 999))
        .await;

    assert!(matches!(result, Err(DataError::NotFound(_))));

    Ok(())
}
