//! Message handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_entity::message::Folder;

use crate::dto::request::{ComposeRequest, ReplyRequest, validate};
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/messages/{folder}
pub async fn list_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(folder): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let folder: Folder = folder.parse()?;
    let page = params.into_page_request();
    let result = state.message_service.list_folder(&auth, folder, &page).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/messages/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let count = state.message_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// POST /api/messages
pub async fn compose(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ComposeRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let message = state
        .message_service
        .compose(
            &auth,
            &req.recipient,
            &req.subject,
            &req.body,
            req.attachment.as_deref(),
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// GET /api/messages/id/{id}
pub async fn detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = state.message_service.detail(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// POST /api/messages/id/{id}/reply
pub async fn reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate(&req)?;
    let message = state.message_service.reply(&auth, id, &req.body).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// PUT /api/messages/id/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = state.message_service.mark_read(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// PUT /api/messages/id/{id}/archive
pub async fn toggle_archive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = state.message_service.toggle_archive(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// DELETE /api/messages/id/{id}
pub async fn soft_delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = state.message_service.soft_delete(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// PUT /api/messages/id/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = state.message_service.restore(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": message })))
}

/// DELETE /api/messages/id/{id}/permanent
pub async fn permanent_delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.message_service.permanent_delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Message permanently deleted".to_string(),
    })))
}
