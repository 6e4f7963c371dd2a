use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{config::SessionSettings, data::login::LoginRepository, error::AppError};

/// Starts the expired session cleanup scheduler
///
/// Runs at the top of every hour and deletes login records older than the
/// session lifetime. The returned scheduler must be kept so it can be shut down
/// along with the server.
///
/// # Arguments
/// - `db`: Database connection
/// - `settings`: Session lifetime used to compute the expiry cutoff
pub async fn start_scheduler(
    db: DatabaseConnection,
    settings: SessionSettings,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_sessions(&db, settings).await {
                tracing::error!("Error purging expired sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(scheduler)
}

/// Deletes every login record created before the session expiry cutoff
pub async fn purge_expired_sessions(
    db: &DatabaseConnection,
    settings: SessionSettings,
) -> Result<u64, AppError> {
    let cutoff = settings.expiry_cutoff(Utc::now());
    let removed = LoginRepository::new(db, cutoff).purge_expired().await?;

    if removed > 0 {
        tracing::info!("Purged {} expired login records", removed);
    }

    Ok(removed)
}
