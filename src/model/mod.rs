//! Wire-format DTOs shared by the HTTP API.
//!
//! Every type here is what a client sends or receives as JSON. Server-side domain
//! models live in `server::model` and convert to and from these at the controller
//! boundary.

pub mod api;
pub mod dish;
pub mod order;
pub mod user;
