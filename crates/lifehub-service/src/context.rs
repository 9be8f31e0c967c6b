//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifehub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted at the HTTP boundary and passed into every service method so
/// that each operation knows *who* is acting. There is no ambient
/// process-wide current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// The username (convenience field from token claims).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, username: String) -> Self {
        Self {
            user_id,
            role,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
