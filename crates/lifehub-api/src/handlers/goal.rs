//! Goal handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifehub_core::error::AppError;

use crate::dto::request::{ReorderRequest, SaveGoalSelectionRequest, UpdateProgressRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/goals
pub async fn list_goals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let overview = state.goal_service.list(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": overview })))
}

/// POST /api/goals/selection
pub async fn save_selection(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveGoalSelectionRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .goal_service
        .save_selection(&auth, req.goal_ids, req.new_titles)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Goals saved".to_string(),
    })))
}

/// PUT /api/goals/{id}/progress
pub async fn update_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .goal_service
        .update_progress(&auth, id, req.progress)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// PUT /api/goals/{id}/toggle
pub async fn toggle_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, AppError> {
    let completed = state.goal_service.toggle(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse { completed })))
}

/// DELETE /api/goals/{id}
pub async fn delete_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.goal_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Goal deleted".to_string(),
    })))
}

/// PUT /api/goals/reorder
pub async fn reorder_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.goal_service.reorder(&auth, req.order).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Order saved".to_string(),
    })))
}
