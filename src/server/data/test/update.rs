use super::*;

/// Tests that update overwrites every field of the stored row.
///
/// Expected: Ok(model) and a subsequent get returns the new values
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    let dish = factory::create_dish(db).await?;

    let changed = entity::dish::Model {
        id: dish.id,
        name: "Renamed".to_string(),
        price: 99,
        category: "special".to_string(),
        img: "renamed.png".to_string(),
    };
    let updated = repo.update(changed.clone()).await.unwrap();

    assert_eq!(updated, changed);

    let fetched = repo
        .get(Filter::new().eq(entity::dish::Column::Id, dish.id))
        .await
        .unwrap();
    assert_eq!(fetched, changed);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn missing_row_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dish).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = Repository::<Dish>::new(db);

    let mut ghost = new_dish("Ghost", 1, "none");
    ghost.id = 777;

    let result = repo.update(ghost).await;

    assert!(matches!(result, Err(DataError::NotFound(_))));

    Ok(())
}
