//! Document metadata handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::request::{validate, CreateDocumentRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/applications/{id}/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let document = state
        .document_service
        .create(&auth, req.into_input(application_id))
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": document }),
    ))
}

/// GET /api/applications/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let documents = state.document_service.list(&auth, application_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": documents }),
    ))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.document_service.delete(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Deleted" } }),
    ))
}
