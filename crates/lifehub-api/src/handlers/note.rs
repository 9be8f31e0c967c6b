//! Note handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifehub_core::error::AppError;

use crate::dto::request::{CreateNoteRequest, validate};
use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let notes = state.note_service.list(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": notes })))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let note = state.note_service.create(&auth, &req.text).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": note })))
}

/// PUT /api/notes/{id}/toggle
pub async fn toggle_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, AppError> {
    let completed = state.note_service.toggle(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse { completed })))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.note_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Note deleted".to_string(),
    })))
}
