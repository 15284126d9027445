//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token by API middleware and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Display name from the token claims, when present.
    pub display_name: Option<String>,
    /// Email address from the token claims, when present.
    pub email: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, display_name: Option<String>, email: Option<String>) -> Self {
        Self {
            user_id,
            display_name,
            email,
            request_time: Utc::now(),
        }
    }
}

#[cfg(test)]
impl RequestContext {
    /// Context for a bare user id, used throughout the service tests.
    pub fn for_user(user_id: Uuid) -> Self {
        Self::new(user_id, None, None)
    }
}
