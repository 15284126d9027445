//! Narrow store traits over the persistence layer.
//!
//! Services and the reminder engine depend on these traits rather than on
//! the concrete sqlx repositories, so the temporal logic can be exercised
//! against in-memory doubles without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use jobtrail_core::result::AppResult;
use jobtrail_core::types::pagination::{PageRequest, PageResponse};
use jobtrail_entity::application::Application;
use jobtrail_entity::notification::{NewNotification, Notification};
use jobtrail_entity::user::User;

/// Read access to application state, as consumed by the reminder scanner.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Find an application by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>>;

    /// Snapshot of every application still moving through the pipeline
    /// (status not Offer/Rejected). The scan never mutates these rows.
    async fn find_open(&self) -> AppResult<Vec<Application>>;
}

/// Persistence operations over notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a new notification (insert-only; never updates an existing
    /// record) and return the persisted row.
    async fn insert(&self, new: &NewNotification) -> AppResult<Notification>;

    /// Find a notification by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// List notifications for a user, newest first, optionally unread-only.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Count unread notifications for a user.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Set `read_at` if currently null. Returns `true` when the row was
    /// updated, `false` when it was already read (no-op).
    async fn mark_read(&self, id: Uuid, read_at: DateTime<Utc>) -> AppResult<bool>;

    /// Set `read_at` for every unread notification owned by the user.
    /// Returns the number of rows affected.
    async fn mark_all_read(&self, user_id: Uuid, read_at: DateTime<Utc>) -> AppResult<u64>;

    /// Set `email_sent = TRUE` if currently false. Returns `true` when the
    /// row was updated.
    async fn mark_email_sent(&self, id: Uuid) -> AppResult<bool>;

    /// Permanently delete a notification.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Delete notifications created before the cutoff. Returns the number
    /// of rows removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64>;
}

/// Read access to user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by their primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
