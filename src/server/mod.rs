//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, business logic, data
//! access and infrastructure. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Order submission, ranking, menu and account logic
//! - **Data Layer** (`data/`) - Generic CRUD repository and typed query filters
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Credential** (`credential/`) - Password hashing and session tokens
//! - **Middleware** (`middleware/`) - Authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, token signer, timeouts)
//! - **Startup** (`startup`) - Database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration, CORS and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (order history retention)
//! - **Util** (`util/`) - Request extractors
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the bearer token where required, converts DTOs, calls service
//! 3. **Service** executes business logic through the store's repositories
//! 4. **Data** runs the query and maps any database failure into a `DataError`
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod credential;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
