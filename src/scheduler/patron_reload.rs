use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::patron::{PatronRegistry, PatronService},
};

/// Starts the patron reload scheduler
///
/// Patrons added or removed directly in the database become visible to
/// patron-gated commands on the next run.
///
/// # Arguments
/// - `db`: Database connection
/// - `patrons`: Registry consulted by the dispatcher
/// - `schedule`: Cron expression with a seconds field
pub async fn start_scheduler(
    db: DatabaseConnection,
    patrons: Arc<PatronRegistry>,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let patrons = patrons.clone();

        Box::pin(async move {
            match PatronService::new(&db, &patrons).reload().await {
                Ok(count) => tracing::debug!("Reloaded {} patrons", count),
                Err(e) => tracing::error!("Error reloading patrons: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Patron reload scheduler started ({})", schedule);

    Ok(())
}
