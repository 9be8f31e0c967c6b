//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use lifehub_core::error::AppError;

use crate::dto::response::{ApiResponse, DashboardResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Number of goals and tasks surfaced on the dashboard.
const DASHBOARD_LIMIT: usize = 5;

/// GET /api/dashboard
pub async fn home(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardResponse>>, AppError> {
    let top_goals = state
        .goal_service
        .dashboard_goals(&auth, DASHBOARD_LIMIT as i64)
        .await?;
    let top_tasks = state
        .task_service
        .dashboard_tasks(&auth, DASHBOARD_LIMIT)
        .await?;

    Ok(Json(ApiResponse::ok(DashboardResponse {
        top_goals,
        top_tasks,
    })))
}
