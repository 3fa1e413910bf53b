//! Database access layer.
//!
//! A single generic [`store::Repository`] performs CRUD for every entity in the
//! `entity` crate. Callers describe rows with [`query::Filter`] (equality only) or
//! [`query::Predicate`] (comparisons, set membership, parameterised raw SQL) and
//! receive entity models or a [`DataError`](crate::server::error::data::DataError).
//! Conversion into domain models happens one layer up, in the services.

pub mod query;
pub mod store;

#[cfg(test)]
mod test;
