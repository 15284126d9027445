//! Document metadata CRUD behind ownership checks.
//!
//! File contents live in external storage; this service tracks only the
//! metadata rows and emits the upload notification.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_database::repositories::{ApplicationRepository, DocumentRepository};
use jobtrail_database::store::ApplicationStore;
use jobtrail_entity::document::{Document, NewDocument};
use jobtrail_entity::notification::{NewNotification, NotificationKind};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Fields for registering a document against an application.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    /// The application the document belongs to.
    pub application_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Document category (resume, cover letter, etc.).
    pub doc_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
}

/// Manages document metadata attached to applications.
#[derive(Clone)]
pub struct DocumentService {
    documents: Arc<DocumentRepository>,
    applications: Arc<ApplicationRepository>,
    notifications: NotificationService,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        documents: Arc<DocumentRepository>,
        applications: Arc<ApplicationRepository>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            documents,
            applications,
            notifications,
        }
    }

    /// Registers an uploaded document against an application owned by the
    /// current user.
    pub async fn create(&self, ctx: &RequestContext, input: CreateDocument) -> AppResult<Document> {
        let app = self
            .applications
            .find_by_id(input.application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        if app.user_id != ctx.user_id {
            return Err(AppError::forbidden("Application belongs to another user"));
        }

        let document = self
            .documents
            .create(&NewDocument {
                user_id: ctx.user_id,
                application_id: input.application_id,
                file_name: input.file_name,
                doc_type: input.doc_type,
                size_bytes: input.size_bytes,
            })
            .await?;

        let notification = NewNotification {
            user_id: ctx.user_id,
            kind: NotificationKind::DocumentUploaded,
            title: "Document Uploaded".to_string(),
            message: format!(
                "{} was attached to your application for {} at {}.",
                document.file_name, app.position, app.company
            ),
            metadata: json!({
                "file_name": document.file_name,
                "doc_type": document.doc_type,
                "position": app.position,
                "company": app.company,
            }),
            action_url: format!("/applications/{}", app.id),
            related_type: Some("document".to_string()),
            related_id: Some(document.id),
        };
        if let Err(e) = self.notifications.create(notification).await {
            warn!(error = %e, "Failed to create document notification");
        }

        Ok(document)
    }

    /// Lists the documents attached to an application owned by the
    /// current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
    ) -> AppResult<Vec<Document>> {
        let app = self
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        if app.user_id != ctx.user_id {
            return Err(AppError::forbidden("Application belongs to another user"));
        }
        self.documents.find_by_application(application_id).await
    }

    /// Deletes a document record owned by the current user.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        if document.user_id != ctx.user_id {
            return Err(AppError::forbidden("Document belongs to another user"));
        }
        self.documents.delete(id).await?;
        Ok(())
    }
}
