//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The store wrapping the database connection pool
//! - The token signer holding the session signing key
//! - The bound on how long a submission waits for the retention sweep

use std::time::Duration;

use crate::server::{credential::token::TokenSigner, data::store::Store};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Store` wraps a connection pool (clones share the pool)
/// - `TokenSigner` holds the derived signing keys
/// - `Duration` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Generic data access over the shared connection pool.
    pub store: Store,

    /// Issues and validates session tokens.
    pub tokens: TokenSigner,

    /// How long an order submission waits for the retention sweep.
    pub sweep_timeout: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Store over the database connection pool
    /// - `tokens` - Session token signer
    /// - `sweep_timeout` - Bound on awaiting the post-submission sweep
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: Store, tokens: TokenSigner, sweep_timeout: Duration) -> Self {
        Self {
            store,
            tokens,
            sweep_timeout,
        }
    }
}
