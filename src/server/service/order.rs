//! Order submission and order history retention.
//!
//! A submission moves through [`SubmissionState`]: every item is validated before
//! anything is written, the lines are stored in one transaction, then a retention
//! sweep removes history older than one calendar month. The sweep runs on its own
//! task; the caller waits for it at most `sweep_timeout` and never sees its errors.

use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use chrono::{DateTime, Months, Utc};
use entity::prelude::{Dish as DishEntity, OrderLine as OrderLineEntity};
use sea_orm::DatabaseTransaction;

use crate::server::{
    data::{
        query::{Filter, Predicate},
        store::{Repository, Store},
    },
    error::{data::DataError, AppError},
    model::order::{OrderItem, OrderLine},
};

/// Lifecycle of one order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Validating,
    Rejected,
    Persisting,
    Sweeping,
    Done,
}

/// Outcome of a successful submission.
#[derive(Debug)]
pub struct SubmissionReport {
    /// Stored lines, in the order they were submitted.
    pub lines: Vec<OrderLine>,
    /// Rows removed by the retention sweep, or `None` if it failed or did not
    /// finish within the timeout.
    pub swept: Option<u64>,
}

pub struct OrderService<'a> {
    store: &'a Store,
    sweep_timeout: Duration,
}

impl<'a> OrderService<'a> {
    pub fn new(store: &'a Store, sweep_timeout: Duration) -> Self {
        Self {
            store,
            sweep_timeout,
        }
    }

    /// Validates and stores an order batch, then sweeps expired history.
    ///
    /// The batch is all-or-nothing: a non-positive count or an unknown dish rejects
    /// it before any row is written, and a failed insert rolls back the lines
    /// already written.
    ///
    /// # Returns
    /// - `Ok(SubmissionReport)` - Lines stored
    /// - `Err(DataError::Validation)` - Some count is zero or negative
    /// - `Err(DataError::NotFound)` - Some item references a dish that does not exist
    /// - `Err(DataError::Persistence)` - Write or commit failed
    pub async fn submit(&self, items: Vec<OrderItem>) -> Result<SubmissionReport, AppError> {
        let mut state = SubmissionState::Validating;
        tracing::debug!(?state, items = items.len(), "order submission");

        if let Err(err) = self.validate(&items).await {
            state = SubmissionState::Rejected;
            tracing::info!(?state, reason = %err, "order submission");
            return Err(err.into());
        }

        state = SubmissionState::Persisting;
        tracing::debug!(?state, "order submission");
        let lines = self.persist(&items, Utc::now()).await?;

        state = SubmissionState::Sweeping;
        tracing::debug!(?state, "order submission");
        let swept = self.sweep_bounded().await;

        state = SubmissionState::Done;
        tracing::debug!(?state, lines = lines.len(), ?swept, "order submission");

        Ok(SubmissionReport { lines, swept })
    }

    /// Prices an order from stored dish prices.
    ///
    /// Applies the same checks as [`submit`](Self::submit) and writes nothing.
    ///
    /// # Returns
    /// - `Ok(i64)` - Sum of stored price times count over every item
    /// - `Err(DataError::Validation)` - Non-positive count, or the total does not fit an `i64`
    /// - `Err(DataError::NotFound)` - Some item references a dish that does not exist
    pub async fn total_price(&self, items: &[OrderItem]) -> Result<i64, AppError> {
        let dishes = self.validate(items).await?;

        let total = items.iter().try_fold(0i64, |total, item| {
            let price = dishes.get(&item.dish_id).map_or(0, |dish| dish.price);
            i64::from(price)
                .checked_mul(i64::from(item.count))
                .and_then(|line| total.checked_add(line))
        });

        match total {
            Some(total) => Ok(total),
            None => Err(DataError::Validation("Order total is too large".to_string()).into()),
        }
    }

    /// Every stored order line.
    pub async fn get_records(&self) -> Result<Vec<OrderLine>, AppError> {
        let repo = self.store.repository::<OrderLineEntity>();

        let lines = repo.get_all(Filter::new()).await?;

        Ok(lines.into_iter().map(OrderLine::from_entity).collect())
    }

    /// Checks counts first, then that every referenced dish exists.
    ///
    /// Returns the referenced dishes keyed by id.
    async fn validate(
        &self,
        items: &[OrderItem],
    ) -> Result<HashMap<i32, entity::dish::Model>, DataError> {
        if let Some(item) = items.iter().find(|item| item.count <= 0) {
            return Err(DataError::Validation(format!(
                "Count must be positive, dish_id: {}, count: {}",
                item.dish_id, item.count
            )));
        }

        let ids: HashSet<i32> = items.iter().map(|item| item.dish_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let dishes: HashMap<i32, entity::dish::Model> = self
            .store
            .repository::<DishEntity>()
            .get_by_predicate(Predicate::new().is_in(entity::dish::Column::Id, ids))
            .await?
            .into_iter()
            .map(|dish| (dish.id, dish))
            .collect();

        if let Some(item) = items.iter().find(|item| !dishes.contains_key(&item.dish_id)) {
            return Err(DataError::NotFound(format!(
                "Dish {} not found",
                item.dish_id
            )));
        }

        Ok(dishes)
    }

    async fn persist(
        &self,
        items: &[OrderItem],
        now: DateTime<Utc>,
    ) -> Result<Vec<OrderLine>, DataError> {
        let txn = self.store.begin().await?;
        let repo = Repository::<OrderLineEntity, DatabaseTransaction>::new(&txn);

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let line = repo
                .create(entity::order_line::Model {
                    id: 0,
                    dish_id: item.dish_id,
                    count: item.count,
                    created_at: now,
                })
                .await?;
            lines.push(OrderLine::from_entity(line));
        }

        txn.commit().await.map_err(DataError::from_db)?;

        Ok(lines)
    }

    /// Runs the sweep on its own task and waits for it up to the timeout.
    ///
    /// A sweep still running at the deadline is left to finish detached.
    async fn sweep_bounded(&self) -> Option<u64> {
        let store = self.store.clone();
        let handle = tokio::spawn(async move { sweep_expired(&store, Utc::now()).await });

        match tokio::time::timeout(self.sweep_timeout, handle).await {
            Ok(Ok(Ok(removed))) => Some(removed),
            Ok(Ok(Err(err))) => {
                tracing::warn!("Retention sweep failed: {}", err);
                None
            }
            Ok(Err(err)) => {
                tracing::error!("Retention sweep task failed: {}", err);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "Retention sweep still running after {:?}, continuing without it",
                    self.sweep_timeout
                );
                None
            }
        }
    }
}

/// Oldest `created_at` kept by the sweep: one calendar month before `now`.
pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(1))
        .unwrap_or(now - chrono::Duration::days(31))
}

/// Deletes order lines older than [`retention_cutoff`] in one statement.
///
/// # Returns
/// - `Ok(u64)` - Number of lines removed
pub async fn sweep_expired(store: &Store, now: DateTime<Utc>) -> Result<u64, DataError> {
    let cutoff = retention_cutoff(now);

    let removed = store
        .repository::<OrderLineEntity>()
        .delete_by_predicate(Predicate::new().lt(entity::order_line::Column::CreatedAt, cutoff))
        .await?;

    if removed > 0 {
        tracing::info!("Removed {} order lines older than {}", removed, cutoff);
    }

    Ok(removed)
}
