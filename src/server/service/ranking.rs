//! Hot dish ranking.
//!
//! Order lines are summed per dish and the heaviest few are kept with a bounded
//! insertion scan ([`TopK`]) instead of sorting the whole aggregate.

use std::collections::HashMap;

use entity::prelude::{Dish as DishEntity, OrderLine as OrderLineEntity};

use crate::server::{
    data::{
        query::{Filter, Predicate},
        store::Store,
    },
    error::AppError,
    model::dish::Dish,
};

/// Number of dishes returned by the hot dish endpoint.
pub const HOT_DISH_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry<K> {
    pub key: K,
    pub weight: i64,
}

/// Fixed-capacity selector of the `k` heaviest entries.
///
/// Each [`offer`](TopK::offer) scans the slots left to right and inserts before the
/// first slot whose weight is strictly lower, shifting the tail right and dropping
/// whatever falls off the end. Empty slots weigh zero, so non-positive weights are
/// never kept, and an entry never displaces an earlier one of equal weight.
#[derive(Debug)]
pub struct TopK<K> {
    slots: Vec<Option<RankingEntry<K>>>,
}

impl<K> TopK<K> {
    pub fn new(k: usize) -> Self {
        let mut slots = Vec::with_capacity(k + 1);
        slots.resize_with(k, || None);
        Self { slots }
    }

    pub fn offer(&mut self, key: K, weight: i64) {
        let position = self.slots.iter().position(|slot| {
            let held = slot.as_ref().map_or(0, |entry| entry.weight);
            held < weight
        });

        if let Some(index) = position {
            self.slots
                .insert(index, Some(RankingEntry { key, weight }));
            self.slots.pop();
        }
    }

    /// Ranked entries, heaviest first, without empty padding.
    pub fn into_ranked(self) -> Vec<RankingEntry<K>> {
        self.slots.into_iter().flatten().collect()
    }
}

pub struct RankingService<'a> {
    store: &'a Store,
}

impl<'a> RankingService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Up to [`HOT_DISH_LIMIT`] dishes by total ordered quantity, most ordered first.
    ///
    /// Dishes tied on quantity keep the order in which they were first ordered.
    pub async fn hot_dishes(&self) -> Result<Vec<Dish>, AppError> {
        let lines = self
            .store
            .repository::<OrderLineEntity>()
            .get_all(Filter::new())
            .await?;

        let mut top = TopK::new(HOT_DISH_LIMIT);
        for (dish_id, weight) in aggregate(lines) {
            top.offer(dish_id, weight);
        }
        let ranked: Vec<i32> = top.into_ranked().into_iter().map(|entry| entry.key).collect();

        if ranked.is_empty() {
            return Ok(Vec::new());
        }

        let mut dishes: HashMap<i32, entity::dish::Model> = self
            .store
            .repository::<DishEntity>()
            .get_by_predicate(Predicate::new().is_in(entity::dish::Column::Id, ranked.clone()))
            .await?
            .into_iter()
            .map(|dish| (dish.id, dish))
            .collect();

        Ok(ranked
            .into_iter()
            .filter_map(|id| dishes.remove(&id))
            .map(Dish::from_entity)
            .collect())
    }
}

/// Sums `count` per dish, in the order each dish first appears by line id.
///
/// Lines are sorted by id first; the store returns rows in no guaranteed order.
fn aggregate(mut lines: Vec<entity::order_line::Model>) -> Vec<(i32, i64)> {
    lines.sort_by_key(|line| line.id);

    let mut totals: Vec<(i32, i64)> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for line in &lines {
        match index.get(&line.dish_id) {
            Some(&slot) => totals[slot].1 += i64::from(line.count),
            None => {
                index.insert(line.dish_id, totals.len());
                totals.push((line.dish_id, i64::from(line.count)));
            }
        }
    }

    totals
}
