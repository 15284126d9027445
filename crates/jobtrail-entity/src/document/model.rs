//! Document metadata entity model.
//!
//! JobTrail records metadata about uploaded documents (resumes, cover
//! letters); the file bytes themselves live in external storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for a document attached to an application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Application this document belongs to.
    pub application_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Document kind (resume, cover_letter, other).
    pub doc_type: String,
    /// Size in bytes as reported at upload time.
    pub size_bytes: i64,
    /// When the document was uploaded.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    /// Owning user.
    pub user_id: Uuid,
    /// Application this document belongs to.
    pub application_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Document kind.
    pub doc_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
}
