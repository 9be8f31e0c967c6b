//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's task. Titles identify tasks during selection reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Task title.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Position within the user's ordering.
    pub sort_order: i32,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}
