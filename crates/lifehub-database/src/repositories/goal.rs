//! Goal repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_entity::goal::{Goal, GoalKind};

/// Repository for goal CRUD operations and the bulk selection save.
#[derive(Debug, Clone)]
pub struct GoalRepository {
    pool: PgPool,
}

impl GoalRepository {
    /// Create a new goal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all of a user's goals in display order.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Goal>> {
        sqlx::query_as::<_, Goal>(
            "SELECT * FROM goals WHERE user_id = $1 ORDER BY sort_order, created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list goals", e))
    }

    /// List a user's saved (selected) goals, optionally capped.
    pub async fn list_selected(&self, user_id: Uuid, limit: Option<i64>) -> AppResult<Vec<Goal>> {
        sqlx::query_as::<_, Goal>(
            "SELECT * FROM goals WHERE user_id = $1 AND selected = TRUE \
             ORDER BY sort_order, created_at LIMIT $2",
        )
        .bind(user_id)
        .bind(limit.unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved goals", e))
    }

    /// Find one goal scoped to its owner.
    pub async fn find_by_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Goal>> {
        sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find goal", e))
    }

    /// Create a goal.
    pub async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        kind: GoalKind,
        target_value: Option<i32>,
        selected: bool,
        sort_order: i32,
    ) -> AppResult<Goal> {
        sqlx::query_as::<_, Goal>(
            "INSERT INTO goals (user_id, title, kind, target_value, selected, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user_id)
        .bind(title)
        .bind(kind)
        .bind(target_value)
        .bind(selected)
        .bind(sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create goal", e))
    }

    /// Persist progress fields after `Goal::apply_progress`.
    pub async fn update_progress(&self, goal: &Goal) -> AppResult<()> {
        sqlx::query(
            "UPDATE goals SET current_value = $3, completed = $4 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(goal.id)
        .bind(goal.user_id)
        .bind(goal.current_value)
        .bind(goal.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update progress", e))?;
        Ok(())
    }

    /// Set a goal's completed flag.
    pub async fn set_completed(&self, id: Uuid, user_id: Uuid, completed: bool) -> AppResult<()> {
        sqlx::query("UPDATE goals SET completed = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(completed)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle goal", e))?;
        Ok(())
    }

    /// Delete one goal. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete goal", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the user's saved selection in one transaction.
    ///
    /// Clears `selected` on every goal, re-marks the given ids, and appends
    /// newly created goals after the current maximum sort order.
    pub async fn save_selection(
        &self,
        user_id: Uuid,
        goal_ids: &[Uuid],
        new_goals: &[(String, GoalKind, Option<i32>)],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE goals SET selected = FALSE WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear selection", e)
            })?;

        for id in goal_ids {
            // Ids not owned by the user are skipped, not errors.
            sqlx::query("UPDATE goals SET selected = TRUE WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark goal selected", e)
                })?;
        }

        if !new_goals.is_empty() {
            let mut max_order: i32 = sqlx::query_scalar(
                "SELECT COALESCE(MAX(sort_order), 0) FROM goals WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read max sort order", e)
            })?;

            for (title, kind, target_value) in new_goals {
                max_order += 1;
                sqlx::query(
                    "INSERT INTO goals (user_id, title, kind, target_value, selected, sort_order) \
                     VALUES ($1, $2, $3, $4, TRUE, $5)",
                )
                .bind(user_id)
                .bind(title)
                .bind(kind)
                .bind(target_value)
                .bind(max_order)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create goal", e)
                })?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit selection", e)
        })
    }

    /// Apply a full ordering in one transaction. Unknown ids are skipped.
    pub async fn reorder(&self, user_id: Uuid, ordered_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (idx, id) in ordered_ids.iter().enumerate() {
            sqlx::query("UPDATE goals SET sort_order = $3 WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .bind(idx as i32)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to reorder goal", e)
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e))
    }
}
