//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a user-facing notification.
///
/// Stored as a PostgreSQL enum so invalid strings never reach the
/// application; the email dispatcher also selects its template by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An application moved to a different pipeline stage.
    ApplicationStatusChanged,
    /// An interview was scheduled.
    InterviewScheduled,
    /// An interview happens tomorrow.
    InterviewReminder,
    /// A document was uploaded to an application.
    DocumentUploaded,
    /// A new application was created.
    ApplicationCreated,
    /// An application deadline is approaching.
    ApplicationDeadlineApproaching,
    /// A submitted application has gone quiet and deserves a follow-up.
    FollowUpReminder,
    /// A new matching job posting appeared.
    JobPostingNew,
    /// System-level notice.
    System,
    /// Anything that does not fit the other kinds.
    General,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationStatusChanged => "application_status_changed",
            Self::InterviewScheduled => "interview_scheduled",
            Self::InterviewReminder => "interview_reminder",
            Self::DocumentUploaded => "document_uploaded",
            Self::ApplicationCreated => "application_created",
            Self::ApplicationDeadlineApproaching => "application_deadline_approaching",
            Self::FollowUpReminder => "follow_up_reminder",
            Self::JobPostingNew => "job_posting_new",
            Self::System => "system",
            Self::General => "general",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
