//! Note service.

use std::sync::Arc;

use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_database::repositories::note::NoteRepository;
use lifehub_entity::note::Note;

use crate::context::RequestContext;

/// Manages a user's notes.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Lists the caller's notes, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Note>, AppError> {
        self.note_repo.list_by_user(ctx.user_id).await
    }

    /// Creates a note from non-empty text.
    pub async fn create(&self, ctx: &RequestContext, text: &str) -> Result<Note, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Note text is required"));
        }
        self.note_repo.create(ctx.user_id, text).await
    }

    /// Toggles a note's checkbox.
    pub async fn toggle(&self, ctx: &RequestContext, id: Uuid) -> Result<bool, AppError> {
        let note = self
            .note_repo
            .find_by_user(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;

        let completed = !note.completed;
        self.note_repo.set_completed(note.id, ctx.user_id, completed).await?;
        Ok(completed)
    }

    /// Deletes a note.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.note_repo.delete(id, ctx.user_id).await? {
            return Err(AppError::not_found("Note not found"));
        }
        Ok(())
    }
}
