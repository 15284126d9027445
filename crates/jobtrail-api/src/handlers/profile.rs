//! Profile handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{validate, UpdateProfileRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.profile_service.get(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let user = state.profile_service.update(&auth, req.into()).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}
