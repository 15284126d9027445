//! Application handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use jobtrail_entity::application::ApplicationStatus;

use crate::dto::request::{validate, CreateApplicationRequest, UpdateApplicationRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Filter parameters for the application list.
#[derive(Debug, Deserialize)]
pub struct ApplicationListQuery {
    /// Filter by pipeline stage.
    pub status: Option<ApplicationStatus>,
}

/// POST /api/applications
pub async fn create_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let app = state
        .application_service
        .create(&auth, req.into())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": app })))
}

/// GET /api/applications
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ApplicationListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = pagination.into_page_request();
    let result = state
        .application_service
        .list(&auth, filter.status, &page)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let app = state.application_service.get(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": app })))
}

/// PUT /api/applications/{id}
pub async fn update_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let app = state
        .application_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": app })))
}

/// DELETE /api/applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.application_service.delete(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Deleted" } }),
    ))
}
