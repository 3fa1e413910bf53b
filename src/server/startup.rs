use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Idle connections above the minimum are closed after this long.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Connects to the database and runs pending migrations.
///
/// Applies the pool limits from configuration, then runs all pending SeaORM
/// migrations so the schema is up-to-date before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool limits
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to the database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_open)
        .min_connections(config.db_max_idle.min(config.db_max_open))
        .max_lifetime(config.db_max_lifetime)
        .idle_timeout(POOL_IDLE_TIMEOUT)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
