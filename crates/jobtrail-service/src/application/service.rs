//! Application CRUD behind ownership checks.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_core::types::pagination::{PageRequest, PageResponse};
use jobtrail_database::repositories::ApplicationRepository;
use jobtrail_database::store::ApplicationStore;
use jobtrail_entity::application::{
    Application, ApplicationStatus, NewApplication, UpdateApplication,
};
use jobtrail_entity::notification::{NewNotification, NotificationKind};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Fields for creating an application on behalf of the current user.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    /// Position title.
    pub position: String,
    /// Company name.
    pub company: String,
    /// Initial pipeline stage.
    pub status: ApplicationStatus,
    /// Submission date.
    pub applied_date: chrono::NaiveDate,
    /// Scheduled interview time, if known.
    pub interview_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Application deadline, if known.
    pub deadline: Option<chrono::NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Manages a user's job applications.
///
/// Mutations emit in-app notifications through the notification service;
/// a notification failure is logged but never fails the CRUD operation.
#[derive(Clone)]
pub struct ApplicationService {
    repo: Arc<ApplicationRepository>,
    notifications: NotificationService,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(repo: Arc<ApplicationRepository>, notifications: NotificationService) -> Self {
        Self {
            repo,
            notifications,
        }
    }

    /// Creates an application owned by the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateApplication,
    ) -> AppResult<Application> {
        let new = NewApplication {
            user_id: ctx.user_id,
            position: input.position,
            company: input.company,
            status: input.status,
            applied_date: input.applied_date,
            interview_date: input.interview_date,
            deadline: input.deadline,
            notes: input.notes,
        };
        let app = self.repo.create(&new).await?;

        self.notify(NewNotification {
            user_id: app.user_id,
            kind: NotificationKind::ApplicationCreated,
            title: "Application Created".to_string(),
            message: format!(
                "Your application for {} at {} was created.",
                app.position, app.company
            ),
            metadata: json!({ "position": app.position, "company": app.company }),
            action_url: format!("/applications/{}", app.id),
            related_type: Some("application".to_string()),
            related_id: Some(app.id),
        })
        .await;

        Ok(app)
    }

    /// Fetches one application owned by the current user.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Application> {
        self.owned_by_caller(ctx, id).await
    }

    /// Lists the current user's applications, optionally filtered by
    /// status.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Application>> {
        self.repo.find_by_user(ctx.user_id, status, page).await
    }

    /// Updates an application. A status change emits a status-changed
    /// notification.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateApplication,
    ) -> AppResult<Application> {
        let mut app = self.owned_by_caller(ctx, id).await?;
        let previous_status = app.status;

        if let Some(position) = update.position {
            app.position = position;
        }
        if let Some(company) = update.company {
            app.company = company;
        }
        if let Some(status) = update.status {
            app.status = status;
        }
        if update.interview_date.is_some() {
            app.interview_date = update.interview_date;
        }
        if update.deadline.is_some() {
            app.deadline = update.deadline;
        }
        if update.notes.is_some() {
            app.notes = update.notes;
        }

        let app = self.repo.update(&app).await?;

        if app.status != previous_status {
            self.notify(NewNotification {
                user_id: app.user_id,
                kind: NotificationKind::ApplicationStatusChanged,
                title: "Application Status Changed".to_string(),
                message: format!(
                    "Your application for {} at {} moved to {}.",
                    app.position, app.company, app.status
                ),
                metadata: json!({
                    "position": app.position,
                    "company": app.company,
                    "status": app.status.as_str(),
                    "previous_status": previous_status.as_str(),
                }),
                action_url: format!("/applications/{}", app.id),
                related_type: Some("application".to_string()),
                related_id: Some(app.id),
            })
            .await;
        }

        Ok(app)
    }

    /// Deletes an application owned by the current user. Notifications
    /// referencing it are kept; their reference is weak and lookup-only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        self.owned_by_caller(ctx, id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    async fn owned_by_caller(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Application> {
        let app = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        if app.user_id != ctx.user_id {
            return Err(AppError::forbidden("Application belongs to another user"));
        }
        Ok(app)
    }

    async fn notify(&self, new: NewNotification) {
        if let Err(e) = self.notifications.create(new).await {
            warn!(error = %e, "Failed to create application notification");
        }
    }
}
