//! The daily reminder scan job.

use chrono::Utc;
use tracing::{error, info};

use jobtrail_service::ReminderEngine;

/// Run one reminder scan pass against the current wall-clock instant.
///
/// The instant is resolved here, at the trigger boundary, and passed into
/// the engine so the scan itself stays deterministic.
pub async fn run_reminder_scan(engine: &ReminderEngine) {
    let now = Utc::now();
    info!(%now, "Starting reminder scan");

    match engine.run_scan(now).await {
        Ok(summary) => {
            info!(
                interview_reminders = summary.interview_reminders,
                deadline_warnings = summary.deadline_warnings,
                follow_up_reminders = summary.follow_up_reminders,
                failures = summary.failures,
                "Reminder scan finished"
            );
        }
        Err(e) => {
            error!(error = %e, "Reminder scan aborted");
        }
    }
}
