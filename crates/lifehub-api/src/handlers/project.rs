//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifehub_core::error::AppError;

use crate::dto::request::{PostProjectMessageRequest, ProjectRequest, validate};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let projects = state.project_service.list(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": projects })))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let project = state.project_service.create(&auth, req.into()).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": project })))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let project = state.project_service.get(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": project })))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let project = state.project_service.update(&auth, id, req.into()).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": project })))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.project_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Project deleted".to_string(),
    })))
}

/// GET /api/projects/{id}/messages
pub async fn list_project_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let messages = state.project_service.list_messages(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": messages })))
}

/// POST /api/projects/{id}/messages
pub async fn post_project_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PostProjectMessageRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let message = state
        .project_service
        .post_message(&auth, id, &req.subject, &req.body)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// PUT /api/projects/messages/{id}/archive
pub async fn archive_project_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.project_service.archive_message(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Message archived".to_string(),
    })))
}
