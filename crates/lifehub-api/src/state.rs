//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use lifehub_auth::activation::ActivationTokens;
use lifehub_auth::password::PasswordHasher;
use lifehub_auth::token::Tokens;
use lifehub_core::config::AppConfig;

use lifehub_service::account::AccountService;
use lifehub_service::goal::GoalService;
use lifehub_service::message::MessageService;
use lifehub_service::note::NoteService;
use lifehub_service::project::ProjectService;
use lifehub_service::task::TaskService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token service
    pub tokens: Arc<Tokens>,
    /// Activation token service
    pub activation: Arc<ActivationTokens>,
    /// Password hasher (Argon2id + zxcvbn)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Services ─────────────────────────────────────────────
    /// Account lifecycle service
    pub account_service: Arc<AccountService>,
    /// Goal service
    pub goal_service: Arc<GoalService>,
    /// Task service
    pub task_service: Arc<TaskService>,
    /// Note service
    pub note_service: Arc<NoteService>,
    /// Message service
    pub message_service: Arc<MessageService>,
    /// Project service
    pub project_service: Arc<ProjectService>,
}
