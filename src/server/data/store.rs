//! Generic CRUD over any SeaORM entity.
//!
//! `Store` owns the pooled connection and is built once at startup, then handed to
//! every component through `AppState`. `Repository<E, C>` is the single CRUD
//! implementation, instantiated per entity type and usable over either the pool or a
//! transaction. Every failure is logged with the operation, table and subject, then
//! converted into a [`DataError`] so no raw `DbErr` leaves this module.

use std::{fmt::Debug, marker::PhantomData};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, TransactionTrait, Value,
};

use crate::server::{
    data::query::{Filter, Predicate},
    error::data::DataError,
};

/// Shared handle to the relational store.
///
/// Cheap to clone: `DatabaseConnection` is a pool and clones share it.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Repository for entity `E` over the shared pool.
    pub fn repository<E>(&self) -> Repository<'_, E>
    where
        E: EntityTrait,
        E::Model: IntoActiveModel<E::ActiveModel> + Sync,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        Repository::new(&self.db)
    }

    /// Starts a transaction; build repositories over it with [`Repository::new`].
    pub async fn begin(&self) -> Result<DatabaseTransaction, DataError> {
        self.db.begin().await.map_err(|err| {
            tracing::error!(operation = "begin", cause = %err, "store operation failed");
            DataError::from_db(err)
        })
    }

    /// Drains and closes the pool. Called once after the server stops accepting requests.
    pub async fn close(self) -> Result<(), DataError> {
        self.db.close().await.map_err(DataError::from_db)
    }
}

/// CRUD operations for one entity type.
pub struct Repository<'a, E, C = DatabaseConnection> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, E, C> Repository<'a, E, C>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Persists a new row and returns it with its assigned identifier.
    ///
    /// A zero primary key is treated as unassigned and left for the backend to
    /// generate; every other field is written as given.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row
    /// - `Err(DataError::Conflict)` - A unique constraint rejected the row
    /// - `Err(DataError::Persistence)` - Any other write failure
    pub async fn create(&self, model: E::Model) -> Result<E::Model, DataError> {
        let active = writable::<E>(model.clone(), true);

        active
            .insert(self.db)
            .await
            .map_err(|err| fail::<E>("create", &model, err))
    }

    /// Fetches the single row matching every equality in `filter`.
    ///
    /// The filter should be selective enough to match one row; if several match,
    /// which one is returned is unspecified.
    ///
    /// # Returns
    /// - `Ok(Model)` - The matching row
    /// - `Err(DataError::NotFound)` - No row matched
    /// - `Err(DataError::Persistence)` - Query failure
    pub async fn get(&self, filter: Filter<E>) -> Result<E::Model, DataError> {
        let subject = format!("{filter:?}");

        match E::find()
            .filter(filter.into_condition())
            .one(self.db)
            .await
        {
            Ok(Some(model)) => Ok(model),
            Ok(None) => Err(fail::<E>(
                "get",
                &subject,
                DbErr::RecordNotFound(format!("{} not found", table_name::<E>())),
            )),
            Err(err) => Err(fail::<E>("get", &subject, err)),
        }
    }

    /// Fetches every row matching `filter`; an empty filter returns all rows.
    pub async fn get_all(&self, filter: Filter<E>) -> Result<Vec<E::Model>, DataError> {
        let subject = format!("{filter:?}");

        E::find()
            .filter(filter.into_condition())
            .all(self.db)
            .await
            .map_err(|err| fail::<E>("get_all", &subject, err))
    }

    /// Fetches every row matching `predicate`. Ids absent from an `is_in` set are
    /// simply missing from the result.
    pub async fn get_by_predicate(
        &self,
        predicate: Predicate<E>,
    ) -> Result<Vec<E::Model>, DataError> {
        let subject = format!("{predicate:?}");

        E::find()
            .filter(predicate.into_condition())
            .all(self.db)
            .await
            .map_err(|err| fail::<E>("get_by_predicate", &subject, err))
    }

    /// Overwrites every column of the row whose primary key matches `model`.
    ///
    /// This is a full-document write: read, modify and pass the whole model back.
    ///
    /// # Returns
    /// - `Ok(Model)` - The row as stored after the update
    /// - `Err(DataError::NotFound)` - No row has that primary key
    /// - `Err(DataError::Conflict)` / `Err(DataError::Persistence)` - Write rejected
    pub async fn update(&self, model: E::Model) -> Result<E::Model, DataError> {
        let active = writable::<E>(model.clone(), false);

        active
            .update(self.db)
            .await
            .map_err(|err| fail::<E>("update", &model, err))
    }

    /// Removes the row whose primary key matches `model`. Missing rows are not an error.
    pub async fn delete(&self, model: E::Model) -> Result<(), DataError> {
        let active: E::ActiveModel = model.clone().into_active_model();

        active
            .delete(self.db)
            .await
            .map(|_| ())
            .map_err(|err| fail::<E>("delete", &model, err))
    }

    /// Removes the row with primary key `id`. Missing rows are not an error.
    pub async fn delete_by_id<T>(&self, id: T) -> Result<(), DataError>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Debug,
    {
        let subject = format!("{id:?}");

        E::delete_by_id(id)
            .exec(self.db)
            .await
            .map(|_| ())
            .map_err(|err| fail::<E>("delete_by_id", &subject, err))
    }

    /// Removes every row matching `predicate` in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_by_predicate(&self, predicate: Predicate<E>) -> Result<u64, DataError> {
        let subject = format!("{predicate:?}");

        E::delete_many()
            .filter(predicate.into_condition())
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
            .map_err(|err| fail::<E>("delete_by_predicate", &subject, err))
    }
}

/// Converts a model into an active model with every column marked for writing.
///
/// With `generate_key`, primary key columns holding zero are left unset so the
/// backend assigns them.
fn writable<E>(model: E::Model, generate_key: bool) -> E::ActiveModel
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    let mut active: E::ActiveModel = model.into_active_model();

    for column in E::Column::iter() {
        match active.take(column) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => active.set(column, value),
            ActiveValue::NotSet => {}
        }
    }

    if generate_key {
        for key in E::PrimaryKey::iter() {
            let column = key.into_column();
            if let ActiveValue::Set(value) = active.get(column) {
                if is_unassigned(&value) {
                    active.not_set(column);
                }
            }
        }
    }

    active
}

/// Whether a primary key value means "not yet assigned".
fn is_unassigned(value: &Value) -> bool {
    matches!(
        value,
        Value::TinyInt(None | Some(0))
            | Value::SmallInt(None | Some(0))
            | Value::Int(None | Some(0))
            | Value::BigInt(None | Some(0))
            | Value::TinyUnsigned(None | Some(0))
            | Value::SmallUnsigned(None | Some(0))
            | Value::Unsigned(None | Some(0))
            | Value::BigUnsigned(None | Some(0))
    )
}

fn table_name<E: EntityTrait>() -> String {
    E::default().table_name().to_string()
}

/// Logs a failed store operation and maps the cause.
fn fail<E: EntityTrait>(operation: &'static str, subject: &dyn Debug, err: DbErr) -> DataError {
    let cause = err.to_string();
    let mapped = DataError::from_db(err);
    let table = table_name::<E>();

    match mapped {
        DataError::Persistence(_) => tracing::error!(
            operation,
            table = %table,
            subject = ?subject,
            cause = %cause,
            "store operation failed"
        ),
        _ => tracing::warn!(
            operation,
            table = %table,
            subject = ?subject,
            cause = %cause,
            "store operation failed"
        ),
    }

    mapped
}
