//! Job application entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// A tracked job application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Position title applied for.
    pub position: String,
    /// Company name.
    pub company: String,
    /// Current pipeline stage.
    pub status: ApplicationStatus,
    /// Calendar date the application was submitted.
    pub applied_date: NaiveDate,
    /// Scheduled interview time, if any.
    pub interview_date: Option<DateTime<Utc>>,
    /// Application deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    /// Owning user.
    pub user_id: Uuid,
    /// Position title.
    pub position: String,
    /// Company name.
    pub company: String,
    /// Initial pipeline stage.
    pub status: ApplicationStatus,
    /// Submission date.
    pub applied_date: NaiveDate,
    /// Scheduled interview time, if known.
    pub interview_date: Option<DateTime<Utc>>,
    /// Application deadline, if known.
    pub deadline: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Data for updating an existing application. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateApplication {
    /// New position title.
    pub position: Option<String>,
    /// New company name.
    pub company: Option<String>,
    /// New pipeline stage.
    pub status: Option<ApplicationStatus>,
    /// New interview time.
    pub interview_date: Option<DateTime<Utc>>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
    /// New notes.
    pub notes: Option<String>,
}
