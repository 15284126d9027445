//! Notification email dispatcher.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use jobtrail_core::config::EmailConfig;
use jobtrail_core::result::AppResult;
use jobtrail_entity::notification::Notification;
use jobtrail_entity::user::User;

use crate::templates::EmailTemplates;
use crate::transport::{MailTransport, OutgoingEmail};

/// Renders a notification into an email and hands it to the transport.
///
/// Dispatch is decoupled from notification creation: a notification may be
/// visible in-app before (or even if never) emailed. The caller records the
/// outcome; the dispatcher never touches persistence.
pub struct EmailDispatcher {
    transport: Arc<dyn MailTransport>,
    templates: EmailTemplates,
    frontend_base_url: String,
}

impl EmailDispatcher {
    /// Create a dispatcher over the given transport.
    pub fn new(transport: Arc<dyn MailTransport>, config: &EmailConfig) -> AppResult<Self> {
        Ok(Self {
            transport,
            templates: EmailTemplates::new()?,
            frontend_base_url: config.frontend_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Render and send the email for one notification.
    ///
    /// A template or transport failure is returned to the caller; it is
    /// scoped to this single notification and must not abort the rest of a
    /// dispatch queue.
    pub async fn dispatch(&self, notification: &Notification, user: &User) -> AppResult<()> {
        let context = self.build_context(notification, user);
        let rendered = self.templates.render(notification.kind, &context)?;

        let email = OutgoingEmail {
            to_address: user.email.clone(),
            to_name: user.display_name.clone(),
            subject: rendered.subject,
            html: rendered.html,
            text: rendered.text,
        };

        self.transport.send(&email).await?;

        debug!(
            notification_id = %notification.id,
            kind = %notification.kind,
            to = %user.email,
            "Notification email dispatched"
        );
        Ok(())
    }

    /// Flatten the notification into a template context. Metadata keys the
    /// factory did not populate render as "N/A" rather than failing.
    fn build_context(&self, notification: &Notification, user: &User) -> serde_json::Value {
        let meta = |key: &str| match notification.metadata.get(key) {
            Some(v) if !v.is_null() => v.clone(),
            _ => json!("N/A"),
        };

        json!({
            "user": { "name": user.display_name },
            "title": notification.title,
            "message": notification.message,
            "action_url": format!("{}{}", self.frontend_base_url, notification.action_url),
            "position": meta("position"),
            "company": meta("company"),
            "interview_date": meta("interview_date"),
            "days_remaining": meta("days_remaining"),
            "days_since_applied": meta("days_since_applied"),
            "metadata": notification.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use jobtrail_core::error::AppError;
    use jobtrail_entity::notification::NotificationKind;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
            self.sent.lock().unwrap().push(email.clone());
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
            frontend_base_url: "http://localhost:3000/".to_string(),
        }
    }

    fn notification() -> Notification {
        let app_id = Uuid::new_v4();
        Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: NotificationKind::InterviewReminder,
            title: "Interview Reminder".to_string(),
            message: "Your interview for Backend Engineer at Initech is tomorrow.".to_string(),
            metadata: json!({ "position": "Backend Engineer", "company": "Initech" }),
            action_url: format!("/applications/{app_id}"),
            related_type: Some("application".to_string()),
            related_id: Some(app_id),
            read_at: None,
            email_sent: false,
            created_at: Utc::now(),
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn dispatch_sends_rendered_email_with_absolute_link() {
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = EmailDispatcher::new(transport.clone(), &email_config()).unwrap();

        let notif = notification();
        dispatcher.dispatch(&notif, &user()).await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_address, "ada@example.com");
        assert_eq!(
            sent[0].subject,
            "Interview Reminder: Backend Engineer at Initech"
        );
        // Trailing slash on the base URL is trimmed before concatenation.
        assert!(sent[0]
            .html
            .contains(&format!("http://localhost:3000{}", notif.action_url)));
    }

    #[tokio::test]
    async fn transport_failure_propagates_as_delivery_error() {
        let dispatcher = EmailDispatcher::new(Arc::new(FailingTransport), &email_config()).unwrap();

        let err = dispatcher
            .dispatch(&notification(), &user())
            .await
            .unwrap_err();
        assert_eq!(err.kind, jobtrail_core::error::ErrorKind::Delivery);
    }
}
