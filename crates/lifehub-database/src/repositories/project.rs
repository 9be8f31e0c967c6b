//! Project repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_entity::project::{Project, ProjectMessage, ProjectStatus};

/// Repository for projects, the stakeholder set, and the project board.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a project.
    pub async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        description: &str,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
        status: ProjectStatus,
    ) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (owner_id, name, description, start_date, end_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Find a project by id, unscoped. Callers gate visibility through the
    /// access policy.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// List projects where the user is owner or stakeholder, deduplicated,
    /// newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT DISTINCT p.* FROM projects p \
             LEFT JOIN project_stakeholders s ON s.project_id = p.id \
             WHERE p.owner_id = $1 OR s.user_id = $1 \
             ORDER BY p.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// List every project (administrative view), newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Update a project's editable fields.
    pub async fn update(&self, project: &Project) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = $2, description = $3, start_date = $4, \
             end_date = $5, status = $6, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))
    }

    /// Delete a project (cascades to stakeholders and board messages).
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;
        Ok(())
    }

    /// Load the stakeholder set for a project.
    pub async fn stakeholders(&self, project_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar("SELECT user_id FROM project_stakeholders WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load stakeholders", e)
            })
    }

    /// Whether a user is in the project's stakeholder set.
    pub async fn is_stakeholder(&self, project_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM project_stakeholders WHERE project_id = $1 AND user_id = $2",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check stakeholder", e)
        })?;
        Ok(count > 0)
    }

    /// Replace the stakeholder set in one transaction. Duplicates in the
    /// input collapse via the primary key.
    pub async fn set_stakeholders(&self, project_id: Uuid, user_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM project_stakeholders WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear stakeholders", e)
            })?;

        for user_id in user_ids {
            sqlx::query(
                "INSERT INTO project_stakeholders (project_id, user_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(project_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to add stakeholder", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit stakeholders", e)
        })
    }

    /// List a project's unarchived board messages, newest first.
    pub async fn list_messages(&self, project_id: Uuid) -> AppResult<Vec<ProjectMessage>> {
        sqlx::query_as::<_, ProjectMessage>(
            "SELECT * FROM project_messages WHERE project_id = $1 AND is_archived = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list project messages", e)
        })
    }

    /// Post a message to a project's board.
    pub async fn create_message(
        &self,
        project_id: Uuid,
        sender_id: Uuid,
        subject: &str,
        body: &str,
    ) -> AppResult<ProjectMessage> {
        sqlx::query_as::<_, ProjectMessage>(
            "INSERT INTO project_messages (project_id, sender_id, subject, body) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(project_id)
        .bind(sender_id)
        .bind(subject)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create project message", e)
        })
    }

    /// Find a board message by id.
    pub async fn find_message(&self, id: Uuid) -> AppResult<Option<ProjectMessage>> {
        sqlx::query_as::<_, ProjectMessage>("SELECT * FROM project_messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project message", e)
            })
    }

    /// Archive a board message.
    pub async fn archive_message(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE project_messages SET is_archived = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to archive project message", e)
            })?;
        Ok(())
    }
}
