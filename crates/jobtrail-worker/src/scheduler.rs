//! Cron scheduler for periodic background tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use jobtrail_core::config::WorkerConfig;
use jobtrail_core::error::AppError;
use jobtrail_database::store::NotificationStore;
use jobtrail_service::ReminderEngine;

use crate::jobs;

/// Cron-based scheduler for the reminder scan and retention cleanup.
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Reminder scan engine
    engine: Arc<ReminderEngine>,
    /// Notification store for retention cleanup
    notifications: Arc<dyn NotificationStore>,
    /// Worker configuration
    config: WorkerConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(
        engine: Arc<ReminderEngine>,
        notifications: Arc<dyn NotificationStore>,
        config: WorkerConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self {
            scheduler,
            engine,
            notifications,
            config,
        })
    }

    /// Register all default scheduled tasks
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_reminder_scan().await?;
        self.register_notification_cleanup().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Reminder scan — daily, per `reminder_scan_cron`
    async fn register_reminder_scan(&self) -> Result<(), AppError> {
        let engine = Arc::clone(&self.engine);
        let job = CronJob::new_async(self.config.reminder_scan_cron.as_str(), move |_uuid, _lock| {
            let engine = Arc::clone(&engine);
            Box::pin(async move {
                jobs::reminder::run_reminder_scan(&engine).await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create reminder_scan schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add reminder_scan schedule: {}", e))
        })?;

        tracing::info!(cron = %self.config.reminder_scan_cron, "Registered: reminder_scan");
        Ok(())
    }

    /// Notification cleanup — daily, per `cleanup_cron`
    async fn register_notification_cleanup(&self) -> Result<(), AppError> {
        let notifications = Arc::clone(&self.notifications);
        let retention_days = self.config.notification_retention_days;
        let job = CronJob::new_async(self.config.cleanup_cron.as_str(), move |_uuid, _lock| {
            let notifications = Arc::clone(&notifications);
            Box::pin(async move {
                jobs::cleanup::run_notification_cleanup(notifications.as_ref(), retention_days)
                    .await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create notification_cleanup schedule: {}",
                e
            ))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!(
                "Failed to add notification_cleanup schedule: {}",
                e
            ))
        })?;

        tracing::info!(cron = %self.config.cleanup_cron, "Registered: notification_cleanup");
        Ok(())
    }
}
