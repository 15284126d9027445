//! Application status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a job application.
///
/// Stored as a PostgreSQL enum; invalid strings are rejected at the store
/// boundary rather than carried around as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Application submitted, waiting to hear back.
    Applied,
    /// Interview scheduled or in progress.
    Interview,
    /// Take-home or on-site technical test stage.
    TechnicalTest,
    /// Offer received.
    Offer,
    /// Application rejected.
    Rejected,
}

impl ApplicationStatus {
    /// Whether the application is still moving through the pipeline.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Offer | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::TechnicalTest => "technical_test",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
