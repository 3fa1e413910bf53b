//! Request helpers shared by controllers.

pub mod payload;
