use super::*;
use crate::server::service::order::{retention_cutoff, sweep_expired, OrderService};
use chrono::{TimeZone, Utc};

/// Tests that one non-positive count rejects the whole batch.
///
/// Verifies the scenario `[{1,3},{2,-1}]`: the valid first line must not be
/// written either.
///
/// Expected: Err(DataError::Validation) and zero order lines
#[tokio::test]
async fn non_positive_count_rejects_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let first = factory::create_dish(db).await?;
    let second = factory::create_dish(db).await?;

    let result = OrderService::new(&store, SWEEP_TIMEOUT)
        .submit(vec![item(first.id, 3), item(second.id, -1)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::DataErr(DataError::Validation(_)))
    ));
    assert_eq!(OrderLine::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a zero count is rejected like a negative one.
///
/// Expected: Err(DataError::Validation)
#[tokio::test]
async fn zero_count_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let dish = factory::create_dish(db).await?;

    let result = OrderService::new(&store, SWEEP_TIMEOUT)
        .submit(vec![item(dish.id, 0)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::DataErr(DataError::Validation(_)))
    ));

    Ok(())
}

/// Tests that a reference to an unknown dish rejects the batch.
///
/// Expected: Err(DataError::NotFound) and zero order lines
#[tokio::test]
async fn unknown_dish_rejects_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let dish = factory::create_dish(db).await?;

    let result = OrderService::new(&store, SWEEP_TIMEOUT)
        .submit(vec![item(dish.id, 1), item(9999, 1)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::DataErr(DataError::NotFound(_)))
    ));
    assert_eq!(OrderLine::find().count(db).await?, 0);

    Ok(())
}

/// Tests storing a valid batch.
///
/// Expected: Ok with one line per item, in submission order
#[tokio::test]
async fn stores_lines_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let first = factory::create_dish(db).await?;
    let second = factory::create_dish(db).await?;
    let service = OrderService::new(&store, SWEEP_TIMEOUT);

    let report = service
        .submit(vec![item(second.id, 2), item(first.id, 1), item(second.id, 4)])
        .await
        .unwrap();

    let submitted: Vec<(i32, i32)> = report
        .lines
        .iter()
        .map(|line| (line.dish_id, line.count))
        .collect();
    assert_eq!(
        submitted,
        vec![(second.id, 2), (first.id, 1), (second.id, 4)]
    );
    assert_eq!(service.get_records().await.unwrap().len(), 3);

    Ok(())
}

/// Tests that submission sweeps history older than one month.
///
/// Expected: Ok with `swept == Some(1)`; only the new line and the recent line remain
#[tokio::test]
async fn submission_sweeps_expired_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let dish = factory::create_dish(db).await?;
    factory::order_line::OrderLineFactory::new(db, dish.id)
        .created_at(Utc::now() - chrono::Duration::days(45))
        .build()
        .await?;
    factory::order_line::OrderLineFactory::new(db, dish.id)
        .created_at(Utc::now() - chrono::Duration::days(3))
        .build()
        .await?;

    let report = OrderService::new(&store, SWEEP_TIMEOUT)
        .submit(vec![item(dish.id, 1)])
        .await
        .unwrap();

    assert_eq!(report.swept, Some(1));
    assert_eq!(OrderLine::find().count(db).await?, 2);

    Ok(())
}

/// Tests the sweep directly against a fixed clock.
///
/// Expected: Ok(count of lines before the cutoff)
#[tokio::test]
async fn sweep_uses_calendar_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
    let dish = factory::create_dish(db).await?;
    for (month, day) in [(2, 27), (2, 28), (3, 1)] {
        factory::order_line::OrderLineFactory::new(db, dish.id)
            .created_at(Utc.with_ymd_and_hms(2025, month, day, 12, 0, 0).unwrap())
            .build()
            .await?;
    }

    assert_eq!(
        retention_cutoff(now),
        Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap()
    );

    let removed = sweep_expired(&store, now).await.unwrap();

    assert_eq!(removed, 1);
    assert_eq!(OrderLine::find().count(db).await?, 2);

    Ok(())
}

/// Tests pricing from stored prices.
///
/// Verifies `[{1,2}]` at price 50 totals 100.
///
/// Expected: Ok(100)
#[tokio::test]
async fn totals_from_stored_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());

    let dish = factory::dish::create_dish_with_price(db, 50).await?;

    let total = OrderService::new(&store, SWEEP_TIMEOUT)
        .total_price(&[item(dish.id, 2)])
        .await
        .unwrap();

    assert_eq!(total, 100);
    assert_eq!(OrderLine::find().count(db).await?, 0);

    Ok(())
}

/// Tests pricing with repeated dishes and a rejected count.
///
/// Expected: Ok(sum) for the valid batch, Err(Validation) for the invalid one
#[tokio::test]
async fn total_applies_submission_checks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());
    let service = OrderService::new(&store, SWEEP_TIMEOUT);

    let cheap = factory::dish::create_dish_with_price(db, 3).await?;
    let dear = factory::dish::create_dish_with_price(db, 40).await?;

    let total = service
        .total_price(&[item(cheap.id, 2), item(dear.id, 1), item(cheap.id, 1)])
        .await
        .unwrap();
    assert_eq!(total, 49);

    let rejected = service.total_price(&[item(cheap.id, -2)]).await;
    assert!(matches!(
        rejected,
        Err(AppError::DataErr(DataError::Validation(_)))
    ));

    Ok(())
}

/// Tests pricing an order whose total exceeds the `i64` range.
///
/// Expected: Err(Validation) instead of a wrapped or panicking sum
#[tokio::test]
async fn total_overflow_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::new(db.clone());
    let service = OrderService::new(&store, SWEEP_TIMEOUT);

    let dish = factory::dish::create_dish_with_price(db, i32::MAX).await?;

    let two_lines = service
        .total_price(&[item(dish.id, i32::MAX), item(dish.id, i32::MAX)])
        .await
        .unwrap();
    assert_eq!(two_lines, 2 * i64::from(i32::MAX) * i64::from(i32::MAX));

    let rejected = service
        .total_price(&[
            item(dish.id, i32::MAX),
            item(dish.id, i32::MAX),
            item(dish.id, i32::MAX),
        ])
        .await;
    assert!(matches!(
        rejected,
        Err(AppError::DataErr(DataError::Validation(_)))
    ));

    Ok(())
}
