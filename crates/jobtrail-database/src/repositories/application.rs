//! Application repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;
use jobtrail_core::types::pagination::{PageRequest, PageResponse};
use jobtrail_entity::application::{Application, ApplicationStatus, NewApplication};

use crate::store::ApplicationStore;

/// Repository for application CRUD and scan queries.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new application.
    pub async fn create(&self, new: &NewApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications \
             (user_id, position, company, status, applied_date, interview_date, deadline, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(new.user_id)
        .bind(&new.position)
        .bind(&new.company)
        .bind(new.status)
        .bind(new.applied_date)
        .bind(new.interview_date)
        .bind(new.deadline)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create application", e))
    }

    /// List applications for a user, newest first, optionally filtered by
    /// status.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Application>> {
        let filter = if status.is_some() {
            " AND status = $4"
        } else {
            ""
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM applications WHERE user_id = $1{}",
            if status.is_some() {
                " AND status = $2"
            } else {
                ""
            }
        );
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(user_id);
        if let Some(s) = status {
            count_query = count_query.bind(s);
        }
        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
        })?;

        let list_sql = format!(
            "SELECT * FROM applications WHERE user_id = $1{filter} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        let mut list_query = sqlx::query_as::<_, Application>(&list_sql)
            .bind(user_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64);
        if let Some(s) = status {
            list_query = list_query.bind(s);
        }
        let apps = list_query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
        })?;

        Ok(PageResponse::new(
            apps,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Persist a fully-updated application row.
    pub async fn update(&self, app: &Application) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications SET position = $2, company = $3, status = $4, \
             applied_date = $5, interview_date = $6, deadline = $7, notes = $8, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(app.id)
        .bind(&app.position)
        .bind(&app.company)
        .bind(app.status)
        .bind(app.applied_date)
        .bind(app.interview_date)
        .bind(app.deadline)
        .bind(&app.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update application", e))
    }

    /// Delete an application. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete application", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count a user's applications per status.
    pub async fn count_by_status(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<(ApplicationStatus, i64)>> {
        sqlx::query_as::<_, (ApplicationStatus, i64)>(
            "SELECT status, COUNT(*) FROM applications WHERE user_id = $1 GROUP BY status",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count by status", e))
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application", e)
            })
    }

    async fn find_open(&self) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE status NOT IN ('offer', 'rejected')",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load open applications", e)
        })
    }
}
