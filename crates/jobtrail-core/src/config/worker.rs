//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the daily reminder scan.
    #[serde(default = "default_scan_cron")]
    pub reminder_scan_cron: String,
    /// Cron expression for notification retention cleanup.
    #[serde(default = "default_cleanup_cron")]
    pub cleanup_cron: String,
    /// Notifications older than this many days are deleted by cleanup.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
    /// Maximum number of reminder events processed concurrently in one scan.
    #[serde(default = "default_scan_concurrency")]
    pub scan_concurrency: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_scan_cron: default_scan_cron(),
            cleanup_cron: default_cleanup_cron(),
            notification_retention_days: default_retention_days(),
            scan_concurrency: default_scan_concurrency(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scan_cron() -> String {
    // Every day at 8 AM server time.
    "0 0 8 * * *".to_string()
}

fn default_cleanup_cron() -> String {
    // Every day at 2 AM server time.
    "0 0 2 * * *".to_string()
}

fn default_retention_days() -> i64 {
    90
}

fn default_scan_concurrency() -> usize {
    8
}
