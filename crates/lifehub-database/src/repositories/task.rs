//! Task repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_entity::task::Task;

/// Repository for task CRUD operations and reconcile-plan application.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all of a user's tasks in display order.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE user_id = $1 ORDER BY sort_order, created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    /// Count a user's tasks.
    pub async fn count_by_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))
    }

    /// Find one task scoped to its owner.
    pub async fn find_by_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// Insert the default task list for a user who has none yet.
    pub async fn seed_defaults(&self, user_id: Uuid, titles: &[&str]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (idx, title) in titles.iter().enumerate() {
            sqlx::query("INSERT INTO tasks (user_id, title, sort_order) VALUES ($1, $2, $3)")
                .bind(user_id)
                .bind(title)
                .bind(idx as i32)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to seed task", e)
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))
    }

    /// Set a task's completed flag.
    pub async fn set_completed(&self, id: Uuid, user_id: Uuid, completed: bool) -> AppResult<()> {
        sqlx::query("UPDATE tasks SET completed = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(completed)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle task", e))?;
        Ok(())
    }

    /// Delete one task. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a reconcile plan in one transaction for the given user.
    ///
    /// Deletions, repositions, and creations land atomically so a concurrent
    /// reader never observes a half-applied selection.
    pub async fn apply_reconcile(
        &self,
        user_id: Uuid,
        delete: &[Uuid],
        reposition: &[(Uuid, i32)],
        create: &[(String, i32)],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if !delete.is_empty() {
            sqlx::query("DELETE FROM tasks WHERE user_id = $1 AND id = ANY($2)")
                .bind(user_id)
                .bind(delete)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete tasks", e)
                })?;
        }

        for (id, sort_order) in reposition {
            sqlx::query("UPDATE tasks SET sort_order = $3 WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .bind(sort_order)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reposition task", e)
                })?;
        }

        for (title, sort_order) in create {
            sqlx::query("INSERT INTO tasks (user_id, title, sort_order) VALUES ($1, $2, $3)")
                .bind(user_id)
                .bind(title)
                .bind(sort_order)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create task", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reconcile", e)
        })
    }

    /// Apply a full ordering in one transaction. Unknown ids are skipped.
    pub async fn reorder(&self, user_id: Uuid, ordered_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (idx, id) in ordered_ids.iter().enumerate() {
            sqlx::query("UPDATE tasks SET sort_order = $3 WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .bind(idx as i32)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reorder task", e)
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e))
    }
}
