use super::*;

/// Tests that an empty table yields an empty list, not an error.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn empty_table_returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    let dishes = repo.get_all(Filter::new()).await.unwrap();

    assert!(dishes.is_empty());

    Ok(())
}

/// Tests that an empty filter returns every row.
///
/// Expected: Ok with all three dishes
#[tokio::test]
async fn empty_filter_returns_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    for _ in 0..3 {
        factory::create_dish(db).await?;
    }

    let dishes = repo.get_all(Filter::new()).await.unwrap();

    assert_eq!(dishes.len(), 3);

    Ok(())
}

/// Tests filtering by category.
///
/// Expected: Ok with only the matching category's rows
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    factory::dish::DishFactory::new(db).category("soup").build().await?;
    factory::dish::DishFactory::new(db).category("soup").build().await?;
    factory::dish::DishFactory::new(db).category("dessert").build().await?;

    let soups = repo
        .get_all(Filter::new().eq(entity::dish::Column::Category, "soup"))
        .await
        .unwrap();

    assert_eq!(soups.len(), 2);
    assert!(soups.iter().all(|dish| dish.category == "soup"));

    Ok(())
}
