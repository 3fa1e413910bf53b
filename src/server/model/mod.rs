//! Server-side domain models.
//!
//! Domain models are converted from entity models by the services and transformed
//! to DTOs at the controller boundary, keeping database and API shapes apart.

pub mod dish;
pub mod order;
pub mod user;
