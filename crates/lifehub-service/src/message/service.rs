//! Message service: folder listings, compose/reply, and flag transitions.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_core::types::pagination::{PageRequest, PageResponse};
use lifehub_database::repositories::message::MessageRepository;
use lifehub_database::repositories::user::UserRepository;
use lifehub_entity::message::{Folder, Message};

use super::policy;
use crate::context::RequestContext;

/// Manages user-to-user messages through the visibility policy.
#[derive(Debug, Clone)]
pub struct MessageService {
    /// Message repository.
    message_repo: Arc<MessageRepository>,
    /// User repository, for recipient resolution.
    user_repo: Arc<UserRepository>,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(message_repo: Arc<MessageRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            message_repo,
            user_repo,
        }
    }

    /// Lists one folder for the caller, newest first.
    pub async fn list_folder(
        &self,
        ctx: &RequestContext,
        folder: Folder,
        page: &PageRequest,
    ) -> Result<PageResponse<Message>, AppError> {
        self.message_repo
            .list_folder(folder, ctx.user_id, ctx.is_admin(), page)
            .await
    }

    /// Counts unread inbox messages for the caller.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.message_repo.unread_count(ctx.user_id).await
    }

    /// Composes a new message. The recipient is resolved by username and
    /// must not be the caller.
    pub async fn compose(
        &self,
        ctx: &RequestContext,
        recipient_username: &str,
        subject: &str,
        body: &str,
        attachment: Option<&str>,
    ) -> Result<Message, AppError> {
        let recipient = self
            .user_repo
            .find_by_username(recipient_username)
            .await?
            .ok_or_else(|| AppError::not_found("Recipient not found"))?;

        if !policy::compose_allowed(ctx.user_id, recipient.id) {
            return Err(AppError::validation("Cannot send a message to yourself"));
        }

        let message = self
            .message_repo
            .create(ctx.user_id, recipient.id, subject, body, attachment)
            .await?;

        info!(message_id = %message.id, recipient = %recipient.username, "Message sent");
        Ok(message)
    }

    /// Replies to a message the caller is a party to. The recipient is the
    /// other party and the subject carries the `Re:` convention.
    pub async fn reply(
        &self,
        ctx: &RequestContext,
        original_id: Uuid,
        body: &str,
    ) -> Result<Message, AppError> {
        let original = self.fetch_visible(ctx, original_id).await?;

        let recipient = policy::reply_recipient(&original, ctx.user_id)
            .ok_or_else(|| AppError::not_found("Message not found"))?;

        let subject = format!("Re: {}", original.subject);
        self.message_repo
            .create(ctx.user_id, recipient, &subject, body, None)
            .await
    }

    /// Fetches a message for display. Viewing as the recipient marks it
    /// read.
    pub async fn detail(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        let mut message = self.fetch_visible(ctx, id).await?;

        if policy::can_mark_read(&message, ctx.user_id) && !message.is_read {
            message.is_read = true;
            self.message_repo.update_flags(&message).await?;
        }

        Ok(message)
    }

    /// Marks a message read. Recipient-only; idempotent.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        let mut message = self.fetch_visible(ctx, id).await?;

        if !policy::can_mark_read(&message, ctx.user_id) {
            return Err(AppError::forbidden("Only the recipient may mark a message read"));
        }

        if !message.is_read {
            message.is_read = true;
            self.message_repo.update_flags(&message).await?;
        }

        Ok(message)
    }

    /// Flips the archive flag. Recipient or administrator.
    pub async fn toggle_archive(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Message, AppError> {
        let mut message = self.fetch_visible(ctx, id).await?;

        if !policy::can_toggle_archive(&message, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::forbidden("Only the recipient may archive a message"));
        }

        message.archived = !message.archived;
        self.message_repo.update_flags(&message).await?;
        Ok(message)
    }

    /// Soft-deletes the message for every role the caller holds. A call
    /// that changes nothing is a no-op.
    pub async fn soft_delete(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        let mut message = self.fetch_visible(ctx, id).await?;

        if policy::apply_soft_delete(&mut message, ctx.user_id, ctx.is_admin()) {
            self.message_repo.update_flags(&message).await?;
        }

        Ok(message)
    }

    /// Restores the message from trash for every role the caller holds.
    pub async fn restore(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        let mut message = self.fetch_visible(ctx, id).await?;

        if policy::apply_restore(&mut message, ctx.user_id, ctx.is_admin()) {
            self.message_repo.update_flags(&message).await?;
        }

        Ok(message)
    }

    /// Permanently removes the message, bypassing both soft-delete flags.
    pub async fn permanent_delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let message = self.fetch_visible(ctx, id).await?;

        if !policy::can_permanently_delete(&message, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::not_found("Message not found"));
        }

        self.message_repo.delete(message.id).await?;
        info!(message_id = %message.id, "Message permanently deleted");
        Ok(())
    }

    /// Fetch a message the caller may see. Absent and forbidden are the
    /// same NotFound so existence never leaks.
    async fn fetch_visible(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        let message = self
            .message_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Message not found"))?;

        if !policy::can_view(&message, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::not_found("Message not found"));
        }

        Ok(message)
    }
}
