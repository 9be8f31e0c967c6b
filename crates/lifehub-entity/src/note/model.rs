//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A short free-text note with checkbox support.
///
/// Append-only except for toggling and deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Note text.
    pub text: String,
    /// Checkbox state.
    pub completed: bool,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
}
