//! Message repository implementation.
//!
//! Folder listing queries mirror the visibility policy predicates in
//! `lifehub-service`; the policy module remains the authority for
//! per-message mutation gating.

use sqlx::PgPool;
use uuid::Uuid;

use lifehub_core::error::{AppError, ErrorKind};
use lifehub_core::result::AppResult;
use lifehub_core::types::pagination::{PageRequest, PageResponse};
use lifehub_entity::message::{Folder, Message};

/// Repository for message CRUD and folder queries.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

/// WHERE fragment for a folder. `$1` is the caller's user id, `$2` the
/// administrative flag.
fn folder_predicate(folder: Folder) -> &'static str {
    match folder {
        Folder::Inbox => {
            "(recipient_id = $1 OR $2) AND archived = FALSE AND deleted_by_recipient = FALSE"
        }
        Folder::Sent => "(sender_id = $1 OR $2) AND deleted_by_sender = FALSE",
        Folder::Archive => {
            "archived = TRUE AND ($2 OR (recipient_id = $1 AND deleted_by_recipient = FALSE))"
        }
        Folder::Trash => {
            "($2 AND (deleted_by_sender = TRUE OR deleted_by_recipient = TRUE)) \
             OR (sender_id = $1 AND deleted_by_sender = TRUE) \
             OR (recipient_id = $1 AND deleted_by_recipient = TRUE)"
        }
    }
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new message.
    pub async fn create(
        &self,
        sender_id: Uuid,
        recipient_id: Uuid,
        subject: &str,
        body: &str,
        attachment: Option<&str>,
    ) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, recipient_id, subject, body, attachment) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(sender_id)
        .bind(recipient_id)
        .bind(subject)
        .bind(body)
        .bind(attachment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// Find a message by id, unscoped. Callers gate visibility through the
    /// policy module.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find message", e))
    }

    /// List one folder for a caller, newest first.
    pub async fn list_folder(
        &self,
        folder: Folder,
        user_id: Uuid,
        is_admin: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Message>> {
        let predicate = folder_predicate(folder);

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM messages WHERE {predicate}"
        ))
        .bind(user_id)
        .bind(is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count messages", e))?;

        let messages = sqlx::query_as::<_, Message>(&format!(
            "SELECT * FROM messages WHERE {predicate} \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4"
        ))
        .bind(user_id)
        .bind(is_admin)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))?;

        Ok(PageResponse::new(
            messages,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread inbox messages for a recipient.
    pub async fn unread_count(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 \
             AND archived = FALSE AND is_read = FALSE AND deleted_by_recipient = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Persist the full flag set after a policy transition.
    pub async fn update_flags(&self, message: &Message) -> AppResult<()> {
        sqlx::query(
            "UPDATE messages SET is_read = $2, archived = $3, \
             deleted_by_sender = $4, deleted_by_recipient = $5 WHERE id = $1",
        )
        .bind(message.id)
        .bind(message.is_read)
        .bind(message.archived)
        .bind(message.deleted_by_sender)
        .bind(message.deleted_by_recipient)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update flags", e))?;
        Ok(())
    }

    /// Permanently remove a message, bypassing soft-delete flags.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete message", e)
            })?;
        Ok(())
    }
}
