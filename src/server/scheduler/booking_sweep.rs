use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::booking::BookingService};

/// Starts the booking expiry scheduler.
///
/// Each run marks active bookings whose check-out day has passed as completed.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Six-field cron expression, hourly by default
pub async fn start_scheduler(db: DatabaseConnection, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = BookingService::new(&db).sweep_expired().await {
                tracing::error!("Error sweeping expired bookings: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking sweep scheduler started ({})", schedule);

    Ok(())
}
