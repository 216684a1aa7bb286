//! Periodic completion of lapsed rentals.
//!
//! Rentals whose end date has passed would otherwise stay `active` until
//! the owner completes them by hand. This task reuses the same idempotent
//! transition on a fixed interval using `tokio::time::interval`.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use lendhub_db::repositories::RentalRepo;

/// Run the lapsed-rental sweep loop.
///
/// Completes every `active` rental whose end date is strictly before today.
/// Runs until `cancel` is triggered. An `interval_secs` of 0 disables the
/// sweep entirely.
pub async fn run(pool: PgPool, interval_secs: u64, cancel: CancellationToken) {
    if interval_secs == 0 {
        tracing::info!("Rental sweep disabled (interval is 0)");
        return;
    }

    tracing::info!(interval_secs, "Rental sweep started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Rental sweep stopping");
                break;
            }
            _ = interval.tick() => {
                let today = Utc::now().date_naive();
                match RentalRepo::complete_lapsed(&pool, today).await {
                    Ok(completed) => {
                        if completed > 0 {
                            tracing::info!(completed, "Rental sweep: completed lapsed rentals");
                        } else {
                            tracing::debug!("Rental sweep: nothing lapsed");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Rental sweep: update failed");
                    }
                }
            }
        }
    }
}
