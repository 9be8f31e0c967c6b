//! Project message board entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A message posted to a project's board.
///
/// Archiving hides the entry from the default board listing without
/// destroying it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMessage {
    /// Unique identifier.
    pub id: Uuid,
    /// Project the message belongs to.
    pub project_id: Uuid,
    /// Posting user.
    pub sender_id: Uuid,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Whether the message is hidden from the default listing.
    pub is_archived: bool,
    /// When the message was posted.
    pub created_at: DateTime<Utc>,
}
