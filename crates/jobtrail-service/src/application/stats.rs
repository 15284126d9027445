//! Aggregate statistics over a user's applications.

use std::sync::Arc;

use serde::Serialize;

use jobtrail_core::result::AppResult;
use jobtrail_database::repositories::ApplicationRepository;
use jobtrail_entity::application::ApplicationStatus;

use crate::context::RequestContext;

/// Count of applications at one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    /// The pipeline stage.
    pub status: ApplicationStatus,
    /// Applications at this stage.
    pub count: i64,
}

/// Aggregate application statistics for one user.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStats {
    /// Total applications.
    pub total: i64,
    /// Per-status breakdown.
    pub by_status: Vec<StatusCount>,
}

/// Computes per-user application statistics.
#[derive(Clone)]
pub struct StatsService {
    repo: Arc<ApplicationRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(repo: Arc<ApplicationRepository>) -> Self {
        Self { repo }
    }

    /// Summarizes the current user's applications per status.
    pub async fn summary(&self, ctx: &RequestContext) -> AppResult<ApplicationStats> {
        let counts = self.repo.count_by_status(ctx.user_id).await?;
        let total = counts.iter().map(|(_, n)| n).sum();
        let by_status = counts
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();
        Ok(ApplicationStats { total, by_status })
    }
}
