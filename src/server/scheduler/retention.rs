use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::store::Store, error::AppError, service::order::sweep_expired};

/// Every day at 03:00 UTC.
const RETENTION_SCHEDULE: &str = "0 0 3 * * *";

/// Starts the order history retention scheduler
///
/// Submissions already sweep expired order lines, but a quiet menu would keep
/// stale history indefinitely. This job runs the same sweep once a day.
///
/// # Arguments
/// - `store`: Store over the shared connection pool
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; shut it down on exit
/// - `Err(AppError::SchedulerErr)` - Failed to register or start the job
pub async fn start_scheduler(store: Store) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(RETENTION_SCHEDULE, move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            match sweep_expired(&store, Utc::now()).await {
                Ok(removed) => tracing::debug!("Scheduled retention sweep removed {} lines", removed),
                Err(e) => tracing::error!("Error running scheduled retention sweep: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Order retention scheduler started");

    Ok(scheduler)
}
