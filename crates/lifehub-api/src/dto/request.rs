//! Request DTOs.
//!
//! Structural validation happens here via `validator`; semantic rules
//! (ownership, policy, strength) live in the services.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use lifehub_core::error::AppError;
use lifehub_entity::project::ProjectStatus;
use lifehub_service::project::ProjectInput;

/// Run structural validation, mapping failures to a validation error.
pub fn validate(req: &impl Validate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// POST /api/auth/signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    /// Email address for the activation link.
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    /// Plaintext password; strength is checked separately.
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// POST /api/auth/activate
#[derive(Debug, Clone, Deserialize)]
pub struct ActivateRequest {
    /// The emailed activation token.
    pub token: String,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// POST /api/auth/refresh
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    /// A refresh token from a prior login.
    pub refresh_token: String,
}

/// PUT /api/users/me
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(max = 100, message = "display name is too long"))]
    pub display_name: Option<String>,
    /// New bio.
    #[validate(length(max = 1000, message = "bio is too long"))]
    pub bio: Option<String>,
}

/// POST /api/goals/selection
#[derive(Debug, Clone, Deserialize)]
pub struct SaveGoalSelectionRequest {
    /// Existing goal ids to mark selected.
    #[serde(default)]
    pub goal_ids: Vec<Uuid>,
    /// New titles to create and select (catalog or custom).
    #[serde(default)]
    pub new_titles: Vec<String>,
}

/// PUT /api/goals/{id}/progress
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgressRequest {
    /// Requested progress percentage; clamped to [0, 100].
    pub progress: i32,
}

/// PUT /api/goals/reorder and /api/tasks/reorder
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    /// The full ordering, first to last.
    pub order: Vec<Uuid>,
}

/// POST /api/tasks/selection
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTaskSelectionRequest {
    /// Every task the user wants saved, in display order.
    pub titles: Vec<String>,
}

/// POST /api/notes
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoteRequest {
    /// Note text.
    #[validate(length(min = 1, max = 255, message = "text must be 1-255 characters"))]
    pub text: String,
}

/// POST /api/messages
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ComposeRequest {
    /// Recipient username.
    #[validate(length(min = 1, message = "recipient is required"))]
    pub recipient: String,
    /// Subject line.
    #[validate(length(min = 1, max = 255, message = "subject must be 1-255 characters"))]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
    /// Opaque attachment path in external blob storage.
    pub attachment: Option<String>,
}

/// POST /api/messages/id/{id}/reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplyRequest {
    /// Reply body.
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

/// POST /api/projects and PUT /api/projects/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Current status.
    pub status: ProjectStatus,
    /// Replacement stakeholder set.
    #[serde(default)]
    pub stakeholders: Vec<Uuid>,
}

impl From<ProjectRequest> for ProjectInput {
    fn from(req: ProjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
            stakeholders: req.stakeholders,
        }
    }
}

/// POST /api/projects/{id}/messages
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostProjectMessageRequest {
    /// Subject line.
    #[validate(length(min = 1, max = 255, message = "subject must be 1-255 characters"))]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}
