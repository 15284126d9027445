//! Health check handler.

use axum::Json;
use axum::extract::State;

use jobtrail_core::error::AppError;
use jobtrail_database::connection::health_check;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    health_check(&state.db_pool)
        .await
        .map_err(|e| AppError::service_unavailable(format!("Database unreachable: {e}")))?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
