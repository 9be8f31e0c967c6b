//! Health check handler.

use axum::Json;
use axum::extract::State;

use lifehub_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    let database = match lifehub_database::connection::health_check(&state.db_pool).await {
        Ok(true) => "ok",
        _ => "unreachable",
    };

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: if database == "ok" { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })))
}
