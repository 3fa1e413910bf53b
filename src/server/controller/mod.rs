//! HTTP request handlers.
//!
//! Controllers authenticate where required, convert DTOs into domain models, call a
//! service and convert the result back into a DTO. Each handler carries a
//! `utoipa::path` annotation; the router collects them into the OpenAPI document.

pub mod dish;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
