//! The scheduled reminder scan pass.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use jobtrail_database::store::{ApplicationStore, NotificationStore, UserStore};
use jobtrail_entity::notification::Notification;
use jobtrail_mailer::EmailDispatcher;

use crate::notification::NotificationFactory;
use crate::reminder::scanner::{ReminderEvent, ReminderScanner};

/// Per-rule counts for one scan pass, used for operational logging.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScanSummary {
    /// Interview reminders created.
    pub interview_reminders: u64,
    /// Deadline warnings created.
    pub deadline_warnings: u64,
    /// Follow-up reminders created.
    pub follow_up_reminders: u64,
    /// Events whose notification could not be persisted.
    pub failures: u64,
}

enum Outcome {
    Interview,
    Deadline,
    FollowUp,
    Failed,
}

/// Runs one reminder scan pass: snapshot, rule evaluation, notification
/// creation, email dispatch.
///
/// The reference instant is injected by the caller rather than read from
/// the wall clock, so a pass is deterministic and testable. Creation and
/// dispatch for distinct events are independent; a failure for one
/// application never stops processing of the others.
pub struct ReminderEngine {
    applications: Arc<dyn ApplicationStore>,
    notifications: Arc<dyn NotificationStore>,
    users: Arc<dyn UserStore>,
    dispatcher: Option<Arc<EmailDispatcher>>,
    concurrency: usize,
}

impl ReminderEngine {
    /// Creates a new reminder engine. `dispatcher` is `None` when outbound
    /// email is disabled; notifications are then persisted but never sent.
    pub fn new(
        applications: Arc<dyn ApplicationStore>,
        notifications: Arc<dyn NotificationStore>,
        users: Arc<dyn UserStore>,
        dispatcher: Option<Arc<EmailDispatcher>>,
        concurrency: usize,
    ) -> Self {
        Self {
            applications,
            notifications,
            users,
            dispatcher,
            concurrency: concurrency.max(1),
        }
    }

    /// Run one scan pass against the current application snapshot.
    ///
    /// Only a failure to load the snapshot aborts the pass; everything
    /// after that is per-item and fail-soft.
    pub async fn run_scan(&self, now: DateTime<Utc>) -> jobtrail_core::result::AppResult<ScanSummary> {
        let snapshot = self.applications.find_open().await?;
        let events = ReminderScanner::scan(&snapshot, now.date_naive());
        let event_count = events.len();

        let outcomes: Vec<Outcome> = stream::iter(events)
            .map(|event| self.process_event(event))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut summary = ScanSummary::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Interview => summary.interview_reminders += 1,
                Outcome::Deadline => summary.deadline_warnings += 1,
                Outcome::FollowUp => summary.follow_up_reminders += 1,
                Outcome::Failed => summary.failures += 1,
            }
        }

        info!(
            events = event_count,
            interview_reminders = summary.interview_reminders,
            deadline_warnings = summary.deadline_warnings,
            follow_up_reminders = summary.follow_up_reminders,
            failures = summary.failures,
            "Reminder scan pass complete"
        );
        Ok(summary)
    }

    /// Persist and dispatch one event. Errors are logged and absorbed so
    /// the remaining events keep flowing.
    async fn process_event(&self, event: ReminderEvent) -> Outcome {
        let new = NotificationFactory::build(&event);
        let notification = match self.notifications.insert(&new).await {
            Ok(notification) => notification,
            Err(e) => {
                warn!(
                    application_id = %event.application().id,
                    error = %e,
                    "Failed to persist reminder notification"
                );
                return Outcome::Failed;
            }
        };

        self.dispatch_email(&notification).await;

        match event {
            ReminderEvent::InterviewTomorrow { .. } => Outcome::Interview,
            ReminderEvent::DeadlineApproaching { .. } => Outcome::Deadline,
            ReminderEvent::FollowUpDue { .. } => Outcome::FollowUp,
        }
    }

    /// Send the notification email and record the handoff. A delivery or
    /// lookup failure leaves `email_sent` false; there is no retry within
    /// the same pass.
    async fn dispatch_email(&self, notification: &Notification) {
        let Some(dispatcher) = &self.dispatcher else {
            return;
        };

        let user = match self.users.find_by_id(notification.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(user_id = %notification.user_id, "Notification recipient no longer exists");
                return;
            }
            Err(e) => {
                warn!(user_id = %notification.user_id, error = %e, "Failed to load recipient");
                return;
            }
        };

        if let Err(e) = dispatcher.dispatch(notification, &user).await {
            warn!(
                notification_id = %notification.id,
                error = %e,
                "Failed to dispatch notification email"
            );
            return;
        }

        if let Err(e) = self.notifications.mark_email_sent(notification.id).await {
            warn!(
                notification_id = %notification.id,
                error = %e,
                "Email sent but delivery flag update failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    use jobtrail_core::config::EmailConfig;
    use jobtrail_core::error::AppError;
    use jobtrail_core::result::AppResult;
    use jobtrail_entity::application::{Application, ApplicationStatus};
    use jobtrail_entity::notification::NotificationKind;
    use jobtrail_mailer::{MailTransport, OutgoingEmail};

    use crate::testing::{
        user, InMemoryApplicationStore, InMemoryNotificationStore, InMemoryUserStore,
    };

    struct OkTransport;

    #[async_trait]
    impl MailTransport for OkTransport {
        async fn send(&self, _email: &OutgoingEmail) -> AppResult<()> {
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MailTransport for FailingTransport {
        async fn send(&self, _email: &OutgoingEmail) -> AppResult<()> {
            Err(AppError::delivery("connection refused"))
        }
    }

    fn email_config() -> EmailConfig {
        EmailConfig {
            enabled: true,
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@example.com".to_string(),
            from_name: "JobTrail".to_string(),
            send_timeout_seconds: 15,
            frontend_base_url: "http://localhost:3000".to_string(),
        }
    }

    fn interview_application(user_id: Uuid) -> Application {
        Application {
            id: Uuid::new_v4(),
            user_id,
            position: "Backend Engineer".to_string(),
            company: "Initech".to_string(),
            status: ApplicationStatus::Interview,
            applied_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            interview_date: Some(Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap()),
            deadline: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn follow_up_application(user_id: Uuid) -> Application {
        Application {
            id: Uuid::new_v4(),
            user_id,
            position: "Data Engineer".to_string(),
            company: "Globex".to_string(),
            status: ApplicationStatus::Applied,
            applied_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            interview_date: None,
            deadline: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn scan_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 9, 8, 0, 0).unwrap()
    }

    fn engine(
        apps: Vec<Application>,
        notifications: Arc<InMemoryNotificationStore>,
        users: Vec<jobtrail_entity::user::User>,
        dispatcher: Option<Arc<EmailDispatcher>>,
    ) -> ReminderEngine {
        ReminderEngine::new(
            Arc::new(InMemoryApplicationStore::new(apps)),
            notifications,
            Arc::new(InMemoryUserStore::new(users)),
            dispatcher,
            8,
        )
    }

    #[tokio::test]
    async fn scan_creates_interview_reminder_for_tomorrow() {
        let user_id = Uuid::new_v4();
        let app = interview_application(user_id);
        let store = Arc::new(InMemoryNotificationStore::new());
        let engine = engine(vec![app.clone()], store.clone(), vec![], None);

        let summary = engine.run_scan(scan_instant()).await.unwrap();

        assert_eq!(summary.interview_reminders, 1);
        assert_eq!(summary.failures, 0);
        let stored = store.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].kind, NotificationKind::InterviewReminder);
        assert_eq!(stored[0].user_id, user_id);
        assert_eq!(stored[0].action_url, format!("/applications/{}", app.id));
    }

    #[tokio::test]
    async fn rerunning_the_same_day_duplicates_notifications() {
        // There is no dedup key: a second pass on the same calendar day
        // produces a second identical notification.
        let app = interview_application(Uuid::new_v4());
        let store = Arc::new(InMemoryNotificationStore::new());
        let engine = engine(vec![app], store.clone(), vec![], None);

        engine.run_scan(scan_instant()).await.unwrap();
        engine.run_scan(scan_instant()).await.unwrap();

        let stored = store.all();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].kind, stored[1].kind);
    }

    #[tokio::test]
    async fn insert_failure_is_isolated_to_one_event() {
        let user_id = Uuid::new_v4();
        let failing = follow_up_application(user_id);
        let healthy = follow_up_application(user_id);
        let store = Arc::new(InMemoryNotificationStore::fail_insert_for(failing.id));
        let engine = engine(vec![failing, healthy.clone()], store.clone(), vec![], None);

        let summary = engine.run_scan(scan_instant()).await.unwrap();

        assert_eq!(summary.follow_up_reminders, 1);
        assert_eq!(summary.failures, 1);
        let stored = store.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].related_id, Some(healthy.id));
    }

    #[tokio::test]
    async fn successful_dispatch_marks_email_sent() {
        let user_id = Uuid::new_v4();
        let app = interview_application(user_id);
        let store = Arc::new(InMemoryNotificationStore::new());
        let dispatcher =
            Arc::new(EmailDispatcher::new(Arc::new(OkTransport), &email_config()).unwrap());
        let engine = engine(
            vec![app],
            store.clone(),
            vec![user(user_id)],
            Some(dispatcher),
        );

        engine.run_scan(scan_instant()).await.unwrap();

        let stored = store.all();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].email_sent);
    }

    #[tokio::test]
    async fn delivery_failure_leaves_email_sent_false() {
        let user_id = Uuid::new_v4();
        let app = interview_application(user_id);
        let store = Arc::new(InMemoryNotificationStore::new());
        let dispatcher =
            Arc::new(EmailDispatcher::new(Arc::new(FailingTransport), &email_config()).unwrap());
        let engine = engine(
            vec![app],
            store.clone(),
            vec![user(user_id)],
            Some(dispatcher),
        );

        let summary = engine.run_scan(scan_instant()).await.unwrap();

        // The notification exists and counts toward the summary even
        // though the email never went out.
        assert_eq!(summary.interview_reminders, 1);
        let stored = store.all();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].email_sent);
        assert!(stored[0].is_unread());
    }

    #[tokio::test]
    async fn disabled_email_skips_dispatch_entirely() {
        let user_id = Uuid::new_v4();
        let app = interview_application(user_id);
        let store = Arc::new(InMemoryNotificationStore::new());
        let engine = engine(vec![app], store.clone(), vec![user(user_id)], None);

        engine.run_scan(scan_instant()).await.unwrap();

        assert!(!store.all()[0].email_sent);
    }

    #[tokio::test]
    async fn all_three_rules_fire_in_one_pass() {
        let user_id = Uuid::new_v4();
        let interview = interview_application(user_id);
        let follow_up = follow_up_application(user_id);
        let mut deadline = follow_up_application(user_id);
        deadline.applied_date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        deadline.deadline = Some(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap());
        let store = Arc::new(InMemoryNotificationStore::new());
        let engine = engine(vec![interview, follow_up, deadline], store.clone(), vec![], None);

        let summary = engine.run_scan(scan_instant()).await.unwrap();

        assert_eq!(summary.interview_reminders, 1);
        assert_eq!(summary.deadline_warnings, 1);
        assert_eq!(summary.follow_up_reminders, 1);
        assert_eq!(store.all().len(), 3);
    }
}
