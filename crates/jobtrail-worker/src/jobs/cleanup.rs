//! Notification retention cleanup job.

use chrono::{Duration, Utc};
use tracing::{error, info};

use jobtrail_database::store::NotificationStore;

/// Delete notifications older than the retention window.
pub async fn run_notification_cleanup(store: &dyn NotificationStore, retention_days: i64) {
    let cutoff = Utc::now() - Duration::days(retention_days);

    match store.delete_older_than(cutoff).await {
        Ok(removed) => {
            info!(removed, retention_days, "Notification cleanup finished");
        }
        Err(e) => {
            error!(error = %e, "Notification cleanup failed");
        }
    }
}
