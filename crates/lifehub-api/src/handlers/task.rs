//! Task handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifehub_core::error::AppError;

use crate::dto::request::{ReorderRequest, SaveTaskSelectionRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let overview = state.task_service.list(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": overview })))
}

/// POST /api/tasks/selection
pub async fn save_selection(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveTaskSelectionRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.task_service.save_selection(&auth, req.titles).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Tasks saved".to_string(),
    })))
}

/// PUT /api/tasks/{id}/toggle
pub async fn toggle_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, AppError> {
    let completed = state.task_service.toggle(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse { completed })))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.task_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Task deleted".to_string(),
    })))
}

/// PUT /api/tasks/reorder
pub async fn reorder_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.task_service.reorder(&auth, req.order).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Order saved".to_string(),
    })))
}
