//! Note repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_entity::note::Note;

/// Repository for note CRUD operations.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's notes, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    /// Create a note.
    pub async fn create(&self, user_id: Uuid, text: &str) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (user_id, text) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    /// Find one note scoped to its owner.
    pub async fn find_by_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    /// Set a note's completed flag.
    pub async fn set_completed(&self, id: Uuid, user_id: Uuid, completed: bool) -> AppResult<()> {
        sqlx::query("UPDATE notes SET completed = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(completed)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle note", e))?;
        Ok(())
    }

    /// Delete one note. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }
}
