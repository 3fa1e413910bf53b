use entity::prelude::Dish as DishEntity;

use crate::server::{
    data::{query::Filter, store::Store},
    error::{data::DataError, AppError},
    model::dish::Dish,
};

pub struct DishService<'a> {
    store: &'a Store,
}

impl<'a> DishService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Stores a new dish and returns it with its assigned id.
    pub async fn create(&self, dish: Dish) -> Result<Dish, AppError> {
        let repo = self.store.repository::<DishEntity>();

        let created = repo.create(dish.into_entity()).await?;

        Ok(Dish::from_entity(created))
    }

    pub async fn get(&self, id: i32) -> Result<Dish, AppError> {
        let repo = self.store.repository::<DishEntity>();

        let dish = repo
            .get(Filter::new().eq(entity::dish::Column::Id, id))
            .await
            .map_err(|err| match err {
                DataError::NotFound(_) => DataError::NotFound(format!("Dish {} not found", id)),
                err => err,
            })?;

        Ok(Dish::from_entity(dish))
    }

    pub async fn get_all(&self) -> Result<Vec<Dish>, AppError> {
        self.find(Filter::new()).await
    }

    /// Dishes in `category`; an unknown category yields an empty list.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Dish>, AppError> {
        self.find(Filter::new().eq(entity::dish::Column::Category, category))
            .await
    }

    /// Overwrites every field of an existing dish.
    pub async fn update(&self, dish: Dish) -> Result<Dish, AppError> {
        if dish.id <= 0 {
            return Err(DataError::Validation("Dish id is required".to_string()).into());
        }

        let repo = self.store.repository::<DishEntity>();
        let id = dish.id;

        let updated = repo
            .update(dish.into_entity())
            .await
            .map_err(|err| match err {
                DataError::NotFound(_) => DataError::NotFound(format!("Dish {} not found", id)),
                err => err,
            })?;

        Ok(Dish::from_entity(updated))
    }

    /// Removes a dish and, through the foreign key, its order history.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = self.store.repository::<DishEntity>();

        repo.delete_by_id(id).await?;

        Ok(())
    }

    async fn find(&self, filter: Filter<DishEntity>) -> Result<Vec<Dish>, AppError> {
        let repo = self.store.repository::<DishEntity>();

        let dishes = repo.get_all(filter).await?;

        Ok(dishes.into_iter().map(Dish::from_entity).collect())
    }
}
