//! Materializes reminder events into notification records.

use serde_json::json;

use jobtrail_entity::application::Application;
use jobtrail_entity::notification::{NewNotification, NotificationKind};

use crate::reminder::ReminderEvent;

/// Builds the notification record for each reminder event.
///
/// Pure mapping: the engine persists the result, so the factory can be
/// tested without any store. Title and message are rendered here and are
/// immutable after creation; per-kind metadata carries the fields the
/// email templates interpolate.
pub struct NotificationFactory;

impl NotificationFactory {
    /// Map one reminder event to the notification to persist.
    pub fn build(event: &ReminderEvent) -> NewNotification {
        match event {
            ReminderEvent::InterviewTomorrow { application } => NewNotification {
                user_id: application.user_id,
                kind: NotificationKind::InterviewReminder,
                title: "Interview Reminder".to_string(),
                message: format!(
                    "Your interview for {} at {} is tomorrow.",
                    application.position, application.company
                ),
                metadata: json!({
                    "position": application.position,
                    "company": application.company,
                    "interview_date": application.interview_date.map(|d| d.to_rfc3339()),
                }),
                action_url: Self::application_url(application),
                related_type: Some("application".to_string()),
                related_id: Some(application.id),
            },
            ReminderEvent::DeadlineApproaching {
                application,
                days_remaining,
            } => NewNotification {
                user_id: application.user_id,
                kind: NotificationKind::ApplicationDeadlineApproaching,
                title: "Application Deadline Approaching".to_string(),
                message: format!(
                    "The deadline for {} at {} is in {} days.",
                    application.position, application.company, days_remaining
                ),
                metadata: json!({
                    "position": application.position,
                    "company": application.company,
                    "days_remaining": days_remaining,
                }),
                action_url: Self::application_url(application),
                related_type: Some("application".to_string()),
                related_id: Some(application.id),
            },
            ReminderEvent::FollowUpDue {
                application,
                days_since_applied,
            } => NewNotification {
                user_id: application.user_id,
                kind: NotificationKind::FollowUpReminder,
                title: "Follow-up Reminder".to_string(),
                message: format!(
                    "It has been {} days since you applied for {} at {}. Consider following up.",
                    days_since_applied, application.position, application.company
                ),
                metadata: json!({
                    "position": application.position,
                    "company": application.company,
                    "days_since_applied": days_since_applied,
                }),
                action_url: Self::application_url(application),
                related_type: Some("application".to_string()),
                related_id: Some(application.id),
            },
        }
    }

    /// Relative deep link to the application's detail view; the dispatcher
    /// prepends the configured frontend base URL at render time.
    fn application_url(application: &Application) -> String {
        format!("/applications/{}", application.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    use jobtrail_entity::application::ApplicationStatus;

    fn application() -> Application {
        Application {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
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

    #[test]
    fn interview_event_maps_to_interview_reminder() {
        let app = application();
        let event = ReminderEvent::InterviewTomorrow {
            application: app.clone(),
        };

        let new = NotificationFactory::build(&event);

        assert_eq!(new.user_id, app.user_id);
        assert_eq!(new.kind, NotificationKind::InterviewReminder);
        assert_eq!(new.action_url, format!("/applications/{}", app.id));
        assert_eq!(new.related_id, Some(app.id));
        assert_eq!(new.metadata["position"], "Backend Engineer");
        assert_eq!(new.metadata["company"], "Initech");
        assert!(new.metadata["interview_date"].is_string());
    }

    #[test]
    fn deadline_event_carries_days_remaining() {
        let event = ReminderEvent::DeadlineApproaching {
            application: application(),
            days_remaining: 3,
        };

        let new = NotificationFactory::build(&event);

        assert_eq!(new.kind, NotificationKind::ApplicationDeadlineApproaching);
        assert_eq!(new.metadata["days_remaining"], 3);
        assert!(new.message.contains("in 3 days"));
    }

    #[test]
    fn follow_up_event_carries_days_since_applied() {
        let event = ReminderEvent::FollowUpDue {
            application: application(),
            days_since_applied: 7,
        };

        let new = NotificationFactory::build(&event);

        assert_eq!(new.kind, NotificationKind::FollowUpReminder);
        assert_eq!(new.metadata["days_since_applied"], 7);
    }
}
