//! Notification queries and read-state management.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_core::types::pagination::{PageRequest, PageResponse};
use jobtrail_database::store::NotificationStore;
use jobtrail_entity::notification::{NewNotification, Notification};

use crate::context::RequestContext;

/// Manages notification queries and read state for the interactive path.
///
/// Every operation filters by the calling user; a notification owned by
/// someone else is indistinguishable from one the caller cannot see, and
/// targeted mutations on it fail with `Forbidden`.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.store.find_by_user(ctx.user_id, unread_only, page).await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.store.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: re-marking an already-read notification is a no-op
    /// success and leaves the original `read_at` untouched.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.owned_by_caller(ctx, notification_id).await?;
        let updated = self
            .store
            .mark_read(notification_id, ctx.request_time)
            .await?;
        if !updated {
            debug!(%notification_id, "Notification already read");
        }
        Ok(())
    }

    /// Marks every unread notification of the current user as read.
    /// Returns the number of notifications affected.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.store
            .mark_all_read(ctx.user_id, ctx.request_time)
            .await
    }

    /// Permanently deletes a notification owned by the current user.
    pub async fn delete(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.owned_by_caller(ctx, notification_id).await?;
        self.store.delete(notification_id).await
    }

    /// Creates a notification directly, outside the reminder scan path.
    /// Used by the CRUD services for status-change and upload events.
    pub async fn create(&self, new: NewNotification) -> AppResult<Notification> {
        self.store.insert(&new).await
    }

    /// Resolve the notification and verify the caller owns it.
    async fn owned_by_caller(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> AppResult<Notification> {
        let notification = self
            .store
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        if notification.user_id != ctx.user_id {
            return Err(AppError::forbidden("Notification belongs to another user"));
        }
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use jobtrail_core::error::ErrorKind;
    use jobtrail_entity::notification::NotificationKind;

    use crate::testing::InMemoryNotificationStore;

    fn new_notification(user_id: Uuid) -> NewNotification {
        NewNotification {
            user_id,
            kind: NotificationKind::General,
            title: "Notice".to_string(),
            message: "Hello".to_string(),
            metadata: json!({}),
            action_url: "/notifications".to_string(),
            related_type: None,
            related_id: None,
        }
    }

    fn service() -> (NotificationService, Arc<InMemoryNotificationStore>) {
        let store = Arc::new(InMemoryNotificationStore::new());
        (NotificationService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let (service, store) = service();
        let user_id = Uuid::new_v4();
        let ctx = RequestContext::for_user(user_id);
        let created = service.create(new_notification(user_id)).await.unwrap();

        service.mark_read(&ctx, created.id).await.unwrap();
        let first_read_at = store.all()[0].read_at;
        assert!(first_read_at.is_some());

        // Second call succeeds and leaves read_at unchanged.
        let later = RequestContext::for_user(user_id);
        service.mark_read(&later, created.id).await.unwrap();
        assert_eq!(store.all()[0].read_at, first_read_at);
    }

    #[tokio::test]
    async fn mark_read_rejects_foreign_notifications() {
        let (service, _store) = service();
        let owner = Uuid::new_v4();
        let created = service.create(new_notification(owner)).await.unwrap();

        let intruder = RequestContext::for_user(Uuid::new_v4());
        let err = service.mark_read(&intruder, created.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn mark_read_unknown_id_is_not_found() {
        let (service, _store) = service();
        let ctx = RequestContext::for_user(Uuid::new_v4());

        let err = service.mark_read(&ctx, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn unread_count_tracks_read_state_transitions() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();
        let ctx = RequestContext::for_user(user_id);

        let a = service.create(new_notification(user_id)).await.unwrap();
        service.create(new_notification(user_id)).await.unwrap();
        service.create(new_notification(user_id)).await.unwrap();
        assert_eq!(service.unread_count(&ctx).await.unwrap(), 3);

        service.mark_read(&ctx, a.id).await.unwrap();
        assert_eq!(service.unread_count(&ctx).await.unwrap(), 2);

        let affected = service.mark_all_read(&ctx).await.unwrap();
        assert_eq!(affected, 2);
        assert_eq!(service.unread_count(&ctx).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_never_returns_foreign_notifications() {
        let (service, _store) = service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        service.create(new_notification(alice)).await.unwrap();
        service.create(new_notification(bob)).await.unwrap();

        let page = service
            .list(&RequestContext::for_user(alice), false, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert!(page.items.iter().all(|n| n.user_id == alice));
    }

    #[tokio::test]
    async fn list_unread_only_excludes_read_notifications() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();
        let ctx = RequestContext::for_user(user_id);
        let read = service.create(new_notification(user_id)).await.unwrap();
        service.create(new_notification(user_id)).await.unwrap();
        service.mark_read(&ctx, read.id).await.unwrap();

        let page = service
            .list(&ctx, true, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert!(page.items[0].is_unread());
    }

    #[tokio::test]
    async fn delete_rejects_foreign_notifications_and_removes_owned() {
        let (service, store) = service();
        let owner = Uuid::new_v4();
        let created = service.create(new_notification(owner)).await.unwrap();

        let intruder = RequestContext::for_user(Uuid::new_v4());
        let err = service.delete(&intruder, created.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(store.all().len(), 1);

        service
            .delete(&RequestContext::for_user(owner), created.id)
            .await
            .unwrap();
        assert!(store.all().is_empty());
    }
}
