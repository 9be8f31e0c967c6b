//! User repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_entity::user::{CreateUser, UpdateProfile, User, UserStatus};

/// Repository for user CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user row.
    ///
    /// A unique violation on username or email surfaces as a Conflict.
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::conflict("Username or email is already taken")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Update profile fields.
    pub async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET display_name = $2, bio = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.display_name)
        .bind(&update.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }

    /// Transition an account's status.
    pub async fn set_status(&self, id: Uuid, status: UserStatus) -> AppResult<()> {
        sqlx::query("UPDATE users SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set status", e))?;
        Ok(())
    }

    /// Record a successful login.
    pub async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_login_at = $2 WHERE id = $1")
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to record login", e)
            })?;
        Ok(())
    }
}
