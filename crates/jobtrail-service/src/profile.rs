//! Profile access for the authenticated user.

use std::sync::Arc;

use jobtrail_core::error::AppError;
use jobtrail_core::result::AppResult;
use jobtrail_database::repositories::UserRepository;
use jobtrail_database::store::UserStore;
use jobtrail_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Reads and updates the current user's profile.
#[derive(Clone)]
pub struct ProfileService {
    users: Arc<UserRepository>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Fetches the current user's profile.
    pub async fn get(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile.
    pub async fn update(&self, ctx: &RequestContext, update: UpdateProfile) -> AppResult<User> {
        // Fetch first so a deleted account surfaces as NotFound rather
        // than a bare row-missing database error.
        self.get(ctx).await?;
        self.users.update_profile(ctx.user_id, &update).await
    }
}
