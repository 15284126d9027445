//! In-memory store doubles shared by the service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_core::types::pagination::{PageRequest, PageResponse};
use jobtrail_database::store::{ApplicationStore, NotificationStore, UserStore};
use jobtrail_entity::application::Application;
use jobtrail_entity::notification::{NewNotification, Notification};
use jobtrail_entity::user::User;

/// Notification store backed by a `Vec`, with optional insert-failure
/// injection keyed by the notification's related entity.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    rows: Mutex<Vec<Notification>>,
    fail_insert_for: Option<Uuid>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every insert whose `related_id` matches, to exercise per-item
    /// failure isolation in the scan.
    pub fn fail_insert_for(related_id: Uuid) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_insert_for: Some(related_id),
        }
    }

    pub fn all(&self) -> Vec<Notification> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, notification: Notification) {
        self.rows.lock().unwrap().push(notification);
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn insert(&self, new: &NewNotification) -> AppResult<Notification> {
        if self.fail_insert_for.is_some() && new.related_id == self.fail_insert_for {
            return Err(AppError::database("injected insert failure"));
        }
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            kind: new.kind,
            title: new.title.clone(),
            message: new.message.clone(),
            metadata: new.metadata.clone(),
            action_url: new.action_url.clone(),
            related_type: new.related_type.clone(),
            related_id: new.related_id,
            read_at: None,
            email_sent: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self.rows.lock().unwrap().iter().find(|n| n.id == id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let rows = self.rows.lock().unwrap();
        let mut owned: Vec<Notification> = rows
            .iter()
            .filter(|n| n.user_id == user_id && (!unread_only || n.is_unread()))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|n| n.user_id == user_id && n.is_unread())
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid, read_at: DateTime<Utc>) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|n| n.id == id && n.read_at.is_none()) {
            Some(n) => {
                n.read_at = Some(read_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid, read_at: DateTime<Utc>) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for n in rows
            .iter_mut()
            .filter(|n| n.user_id == user_id && n.read_at.is_none())
        {
            n.read_at = Some(read_at);
            affected += 1;
        }
        Ok(affected)
    }

    async fn mark_email_sent(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|n| n.id == id && !n.email_sent) {
            Some(n) => {
                n.email_sent = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.created_at >= cutoff);
        Ok((before - rows.len()) as u64)
    }
}

/// Application store over a fixed snapshot.
pub struct InMemoryApplicationStore {
    rows: Vec<Application>,
}

impl InMemoryApplicationStore {
    pub fn new(rows: Vec<Application>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        Ok(self.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn find_open(&self) -> AppResult<Vec<Application>> {
        Ok(self
            .rows
            .iter()
            .filter(|a| a.status.is_open())
            .cloned()
            .collect())
    }
}

/// User store over a fixed set of accounts.
pub struct InMemoryUserStore {
    rows: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new(rows: Vec<User>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.iter().find(|u| u.id == id).cloned())
    }
}

/// Build a user with the given id for test fixtures.
pub fn user(id: Uuid) -> User {
    User {
        id,
        email: format!("{id}@example.com"),
        display_name: "Test User".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
