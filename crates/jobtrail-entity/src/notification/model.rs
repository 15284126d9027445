//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification delivered to a user.
///
/// `read_at` and `email_sent` are independent axes: a notification can be
/// emailed and unread, or read but never emailed if dispatch failed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Rendered title, immutable after creation.
    pub title: String,
    /// Rendered body text, immutable after creation.
    pub message: String,
    /// Open key/value map; schema varies per kind and absent keys must be
    /// treated as "N/A", never as an error.
    pub metadata: serde_json::Value,
    /// Relative deep link into the frontend.
    pub action_url: String,
    /// Type tag of the triggering entity (weak reference, lookup only).
    pub related_type: Option<String>,
    /// Identifier of the triggering entity (weak reference, lookup only).
    pub related_id: Option<Uuid>,
    /// When the user read the notification; null = unread. Set exactly
    /// once, never unset.
    pub read_at: Option<DateTime<Utc>>,
    /// Whether the notification email was handed to the transport. Starts
    /// false, transitions to true exactly once, never reverts.
    pub email_sent: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is unread.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

/// Data required to persist a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Title text.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Kind-specific metadata map.
    pub metadata: serde_json::Value,
    /// Relative deep link into the frontend.
    pub action_url: String,
    /// Weak reference type tag.
    pub related_type: Option<String>,
    /// Weak reference identifier.
    pub related_id: Option<Uuid>,
}
