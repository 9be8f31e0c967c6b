//! Task service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_database::repositories::task::TaskRepository;
use lifehub_entity::task::Task;

use crate::catalog::POPULAR_TASKS;
use crate::context::RequestContext;
use crate::reconcile::{self, ExistingItem};

/// A task as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    /// Row id.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Position within the user's ordering.
    pub order: i32,
}

impl TaskView {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            order: task.sort_order,
        }
    }
}

/// A catalog task overlaid with the user's matching row, if any.
#[derive(Debug, Clone, Serialize)]
pub struct PopularTaskView {
    /// Catalog title.
    pub title: String,
    /// Whether the user currently has this task saved.
    pub selected: bool,
    /// The saved row's id, if any.
    pub id: Option<Uuid>,
    /// The saved row's position, or the catalog position as a hint.
    pub order_hint: i32,
}

/// The lists backing the tasks page.
#[derive(Debug, Clone, Serialize)]
pub struct TasksOverview {
    /// All currently saved tasks.
    pub tasks: Vec<TaskView>,
    /// The fixed catalog, overlaid with saved state.
    pub popular: Vec<PopularTaskView>,
    /// Saved tasks whose titles are not in the catalog.
    pub custom: Vec<TaskView>,
}

/// Manages a user's tasks.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(task_repo: Arc<TaskRepository>) -> Self {
        Self { task_repo }
    }

    /// Seeds the default task list for a user who has none yet.
    pub async fn ensure_seeded(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if self.task_repo.count_by_user(ctx.user_id).await? == 0 {
            self.task_repo
                .seed_defaults(ctx.user_id, &POPULAR_TASKS)
                .await?;
            info!(user_id = %ctx.user_id, "Seeded default tasks");
        }
        Ok(())
    }

    /// Builds the saved + popular lists for the tasks page, seeding first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<TasksOverview, AppError> {
        self.ensure_seeded(ctx).await?;
        let tasks = self.task_repo.list_by_user(ctx.user_id).await?;

        let by_title: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.title.as_str(), t)).collect();

        let popular = POPULAR_TASKS
            .iter()
            .enumerate()
            .map(|(idx, title)| match by_title.get(title) {
                Some(existing) => PopularTaskView {
                    title: (*title).to_string(),
                    selected: true,
                    id: Some(existing.id),
                    order_hint: existing.sort_order,
                },
                None => PopularTaskView {
                    title: (*title).to_string(),
                    selected: false,
                    id: None,
                    order_hint: idx as i32,
                },
            })
            .collect();

        let custom = tasks
            .iter()
            .filter(|t| !POPULAR_TASKS.contains(&t.title.as_str()))
            .map(TaskView::from_task)
            .collect();

        Ok(TasksOverview {
            tasks: tasks.iter().map(TaskView::from_task).collect(),
            popular,
            custom,
        })
    }

    /// The top tasks shown on the dashboard, seeding first.
    pub async fn dashboard_tasks(
        &self,
        ctx: &RequestContext,
        limit: usize,
    ) -> Result<Vec<TaskView>, AppError> {
        self.ensure_seeded(ctx).await?;
        let tasks = self.task_repo.list_by_user(ctx.user_id).await?;
        Ok(tasks.iter().take(limit).map(TaskView::from_task).collect())
    }

    /// Reconciles the persisted task set against the submitted title list.
    ///
    /// The full plan — deletions, repositions, creations — is applied in a
    /// single transaction for the calling user.
    pub async fn save_selection(
        &self,
        ctx: &RequestContext,
        titles: Vec<String>,
    ) -> Result<(), AppError> {
        let tasks = self.task_repo.list_by_user(ctx.user_id).await?;
        let existing: Vec<ExistingItem> = tasks
            .iter()
            .map(|t| ExistingItem {
                id: t.id,
                title: t.title.clone(),
            })
            .collect();

        let plan = reconcile::plan(&existing, &titles);
        if plan.is_empty() {
            return Ok(());
        }

        self.task_repo
            .apply_reconcile(ctx.user_id, &plan.delete, &plan.reposition, &plan.create)
            .await?;

        info!(
            user_id = %ctx.user_id,
            deleted = plan.delete.len(),
            created = plan.create.len(),
            "Task selection reconciled"
        );
        Ok(())
    }

    /// Toggles completion on a task.
    pub async fn toggle(&self, ctx: &RequestContext, id: Uuid) -> Result<bool, AppError> {
        let task = self
            .task_repo
            .find_by_user(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        let completed = !task.completed;
        self.task_repo.set_completed(task.id, ctx.user_id, completed).await?;
        Ok(completed)
    }

    /// Deletes a task.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.task_repo.delete(id, ctx.user_id).await? {
            return Err(AppError::not_found("Task not found"));
        }
        Ok(())
    }

    /// Applies a full ordering to the user's tasks.
    pub async fn reorder(
        &self,
        ctx: &RequestContext,
        ordered_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        self.task_repo.reorder(ctx.user_id, &ordered_ids).await
    }
}
