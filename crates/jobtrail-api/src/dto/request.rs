//! Request DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_entity::application::{ApplicationStatus, UpdateApplication};
use jobtrail_entity::user::UpdateProfile;
use jobtrail_service::{CreateApplication, CreateDocument};

/// Validate a request body, folding field errors into one message.
pub fn validate<T: Validate>(body: &T) -> AppResult<()> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Body for creating an application.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    /// Position title.
    #[validate(length(min = 1, max = 200))]
    pub position: String,
    /// Company name.
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    /// Initial pipeline stage (defaults to applied).
    #[serde(default = "default_status")]
    pub status: ApplicationStatus,
    /// Submission date.
    pub applied_date: NaiveDate,
    /// Scheduled interview time.
    pub interview_date: Option<DateTime<Utc>>,
    /// Application deadline.
    pub deadline: Option<NaiveDate>,
    /// Free-form notes.
    #[validate(length(max = 10_000))]
    pub notes: Option<String>,
}

fn default_status() -> ApplicationStatus {
    ApplicationStatus::Applied
}

impl From<CreateApplicationRequest> for CreateApplication {
    fn from(req: CreateApplicationRequest) -> Self {
        Self {
            position: req.position,
            company: req.company,
            status: req.status,
            applied_date: req.applied_date,
            interview_date: req.interview_date,
            deadline: req.deadline,
            notes: req.notes,
        }
    }
}

/// Body for updating an application. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    /// New position title.
    #[validate(length(min = 1, max = 200))]
    pub position: Option<String>,
    /// New company name.
    #[validate(length(min = 1, max = 200))]
    pub company: Option<String>,
    /// New pipeline stage.
    pub status: Option<ApplicationStatus>,
    /// New interview time.
    pub interview_date: Option<DateTime<Utc>>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
    /// New notes.
    #[validate(length(max = 10_000))]
    pub notes: Option<String>,
}

impl From<UpdateApplicationRequest> for UpdateApplication {
    fn from(req: UpdateApplicationRequest) -> Self {
        Self {
            position: req.position,
            company: req.company,
            status: req.status,
            interview_date: req.interview_date,
            deadline: req.deadline,
            notes: req.notes,
        }
    }
}

/// Body for registering an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Original file name.
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    /// Document category (resume, cover letter, etc.).
    #[validate(length(min = 1, max = 50))]
    pub doc_type: String,
    /// File size in bytes.
    #[validate(range(min = 0))]
    pub size_bytes: i64,
}

impl CreateDocumentRequest {
    /// Attach the document to an application.
    pub fn into_input(self, application_id: Uuid) -> CreateDocument {
        CreateDocument {
            application_id,
            file_name: self.file_name,
            doc_type: self.doc_type,
            size_bytes: self.size_bytes,
        }
    }
}

/// Body for updating the current user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            display_name: req.display_name,
            email: req.email,
        }
    }
}
