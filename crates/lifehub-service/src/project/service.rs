//! Project service: scoped CRUD, stakeholder management, and the board.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_database::repositories::project::ProjectRepository;
use lifehub_entity::project::{Project, ProjectMessage, ProjectStatus};

use super::access;
use crate::context::RequestContext;

/// A project together with its stakeholder set and derived state.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    /// The project record.
    #[serde(flatten)]
    pub project: Project,
    /// The stakeholder user ids.
    pub stakeholders: Vec<Uuid>,
    /// Whether the project has slipped past its end date.
    pub is_overdue: bool,
}

/// Fields accepted when creating or updating a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    /// Project name.
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

/// Manages projects through the access policy.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(project_repo: Arc<ProjectRepository>) -> Self {
        Self { project_repo }
    }

    /// Lists projects the caller may see: all of them for administrators,
    /// otherwise owner-or-stakeholder, deduplicated.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<ProjectView>, AppError> {
        let projects = if ctx.is_admin() {
            self.project_repo.list_all().await?
        } else {
            self.project_repo.list_for_user(ctx.user_id).await?
        };

        let mut views = Vec::with_capacity(projects.len());
        for project in projects {
            views.push(self.build_view(project).await?);
        }
        Ok(views)
    }

    /// Creates a project owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: ProjectInput,
    ) -> Result<ProjectView, AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Project name is required"));
        }

        let project = self
            .project_repo
            .create(
                ctx.user_id,
                input.name.trim(),
                &input.description,
                input.start_date,
                input.end_date,
                input.status,
            )
            .await?;

        self.project_repo
            .set_stakeholders(project.id, &input.stakeholders)
            .await?;

        info!(project_id = %project.id, "Project created");
        self.build_view(project).await
    }

    /// Fetches one project the caller may view.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<ProjectView, AppError> {
        let (project, stakeholders) = self.fetch_visible(ctx, id).await?;
        Ok(view_of(project, stakeholders))
    }

    /// Updates a project. Owner or administrator only; a stakeholder who
    /// can see the project gets Forbidden rather than NotFound.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: ProjectInput,
    ) -> Result<ProjectView, AppError> {
        let (mut project, _) = self.fetch_visible(ctx, id).await?;

        if !access::can_edit(&project, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::forbidden("Only the project owner may edit it"));
        }
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Project name is required"));
        }

        project.name = input.name.trim().to_string();
        project.description = input.description;
        project.start_date = input.start_date;
        project.end_date = input.end_date;
        project.status = input.status;

        let updated = self.project_repo.update(&project).await?;
        self.project_repo
            .set_stakeholders(updated.id, &input.stakeholders)
            .await?;

        self.build_view(updated).await
    }

    /// Deletes a project. Owner or administrator only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let (project, _) = self.fetch_visible(ctx, id).await?;

        if !access::can_edit(&project, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::forbidden("Only the project owner may delete it"));
        }

        self.project_repo.delete(project.id).await?;
        info!(project_id = %project.id, "Project deleted");
        Ok(())
    }

    /// Lists a project's unarchived board messages for a viewer.
    pub async fn list_messages(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Vec<ProjectMessage>, AppError> {
        self.fetch_visible(ctx, project_id).await?;
        self.project_repo.list_messages(project_id).await
    }

    /// Posts to a project's board. Any viewer may post.
    pub async fn post_message(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<ProjectMessage, AppError> {
        self.fetch_visible(ctx, project_id).await?;
        self.project_repo
            .create_message(project_id, ctx.user_id, subject, body)
            .await
    }

    /// Archives a board message. Project owner or administrator only.
    pub async fn archive_message(
        &self,
        ctx: &RequestContext,
        message_id: Uuid,
    ) -> Result<(), AppError> {
        let message = self
            .project_repo
            .find_message(message_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project message not found"))?;

        let (project, _) = self.fetch_visible(ctx, message.project_id).await?;
        if !access::can_edit(&project, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::forbidden(
                "Only the project owner may archive board messages",
            ));
        }

        self.project_repo.archive_message(message_id).await
    }

    /// Fetch a project the caller may view, with its stakeholder set.
    /// Absent and forbidden are the same NotFound.
    async fn fetch_visible(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(Project, Vec<Uuid>), AppError> {
        let project = self
            .project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        let stakeholders = self.project_repo.stakeholders(project.id).await?;

        if !access::can_view(&project, &stakeholders, ctx.user_id, ctx.is_admin()) {
            return Err(AppError::not_found("Project not found"));
        }

        Ok((project, stakeholders))
    }

    async fn build_view(&self, project: Project) -> Result<ProjectView, AppError> {
        let stakeholders = self.project_repo.stakeholders(project.id).await?;
        Ok(view_of(project, stakeholders))
    }
}

fn view_of(project: Project, stakeholders: Vec<Uuid>) -> ProjectView {
    let is_overdue = project.is_overdue(Utc::now().date_naive());
    ProjectView {
        project,
        stakeholders,
        is_overdue,
    }
}
