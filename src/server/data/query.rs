//! Typed query builders for the generic repository.
//!
//! Two shapes are kept apart:
//! - [`Filter`] holds equality constraints only and backs `get` / `get_all`.
//! - [`Predicate`] holds (column, operator, value) triples, set membership and a
//!   parameterised raw expression, and backs `get_by_predicate` /
//!   `delete_by_predicate`.
//!
//! Values are always bound as statement parameters; nothing supplied by a caller is
//! spliced into SQL text.

use std::fmt;

use sea_orm::{sea_query::Expr, ColumnTrait, Condition, EntityTrait, Value};

/// Equality constraints ANDed together. An empty filter matches every row.
pub struct Filter<E: EntityTrait> {
    clauses: Vec<(E::Column, Value)>,
}

impl<E: EntityTrait> Filter<E> {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Adds `column = value`.
    pub fn eq(mut self, column: E::Column, value: impl Into<Value>) -> Self {
        self.clauses.push((column, value.into()));
        self
    }

    pub(crate) fn into_condition(self) -> Condition {
        self.clauses
            .into_iter()
            .fold(Condition::all(), |condition, (column, value)| {
                condition.add(column.eq(value))
            })
    }
}

impl<E: EntityTrait> Default for Filter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> fmt::Debug for Filter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.clauses.iter().map(|(column, value)| (column, value)))
            .finish()
    }
}

/// Comparison operator of a predicate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

enum Term<E: EntityTrait> {
    Compare {
        column: E::Column,
        operator: Operator,
        value: Value,
    },
    In {
        column: E::Column,
        values: Vec<Value>,
    },
    Raw {
        sql: String,
        values: Vec<Value>,
    },
}

/// Predicate terms ANDed together.
pub struct Predicate<E: EntityTrait> {
    terms: Vec<Term<E>>,
}

impl<E: EntityTrait> Predicate<E> {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Adds a `(column, operator, value)` triple.
    pub fn compare(
        mut self,
        column: E::Column,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.terms.push(Term::Compare {
            column,
            operator,
            value: value.into(),
        });
        self
    }

    pub fn lt(self, column: E::Column, value: impl Into<Value>) -> Self {
        self.compare(column, Operator::Lt, value)
    }

    pub fn gte(self, column: E::Column, value: impl Into<Value>) -> Self {
        self.compare(column, Operator::Gte, value)
    }

    /// Adds `column IN (values...)`. An empty set matches nothing.
    pub fn is_in<V, I>(mut self, column: E::Column, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.terms.push(Term::In {
            column,
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Adds a raw boolean expression with `?` placeholders bound to `values`.
    ///
    /// `sql` must be a constant written by the programmer; caller data belongs in
    /// `values` only.
    pub fn raw<V, I>(mut self, sql: &'static str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.terms.push(Term::Raw {
            sql: sql.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub(crate) fn into_condition(self) -> Condition {
        self.terms
            .into_iter()
            .fold(Condition::all(), |condition, term| match term {
                Term::Compare {
                    column,
                    operator,
                    value,
                } => condition.add(match operator {
                    Operator::Eq => column.eq(value),
                    Operator::Ne => column.ne(value),
                    Operator::Lt => column.lt(value),
                    Operator::Lte => column.lte(value),
                    Operator::Gt => column.gt(value),
                    Operator::Gte => column.gte(value),
                }),
                Term::In { column, values } => condition.add(column.is_in(values)),
                Term::Raw { sql, values } => {
                    condition.add(Expr::cust_with_values(sql, values))
                }
            })
    }
}

impl<E: EntityTrait> Default for Predicate<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for term in &self.terms {
            match term {
                Term::Compare {
                    column,
                    operator,
                    value,
                } => list.entry(&(column, operator, value)),
                Term::In { column, values } => list.entry(&(column, "in", values)),
                Term::Raw { sql, values } => list.entry(&(sql, values)),
            };
        }
        list.finish()
    }
}
