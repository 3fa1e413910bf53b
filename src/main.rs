mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    credential::token::TokenSigner,
    data::store::Store,
    error::AppError,
    router::{cors_layer, router},
    scheduler::retention,
    startup,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let store = Store::new(db);

    let mut scheduler = retention::start_scheduler(store.clone()).await?;

    let state = AppState::new(
        store.clone(),
        TokenSigner::new(config.jwt_secret.as_bytes()),
        config.sweep_timeout,
    );

    let app = router()
        .with_state(state)
        .layer(cors_layer(config.allowed_origins.clone()))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!("Failed to stop retention scheduler: {}", e);
    }

    store.close().await?;

    tracing::info!("Server stopped");

    Ok(())
}
