//! Goal service.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use lifehub_core::error::AppError;
use lifehub_database::repositories::goal::GoalRepository;
use lifehub_entity::goal::{Goal, GoalKind};

use crate::catalog::POPULAR_GOALS;
use crate::context::RequestContext;
use crate::reconcile;

/// A goal as presented to clients.
///
/// Catalog entries the user has not adopted yet are synthetic: no id, no
/// position.
#[derive(Debug, Clone, Serialize)]
pub struct GoalView {
    /// Row id; `None` for a catalog entry not yet in the store.
    pub id: Option<Uuid>,
    /// Goal title.
    pub title: String,
    /// How completion is tracked.
    pub goal_type: GoalKind,
    /// Derived 0-100 progress.
    pub progress: i32,
    /// Completion flag.
    pub completed: bool,
    /// Saved-list membership.
    pub selected: bool,
    /// Position; `None` for a synthetic entry.
    pub order: Option<i32>,
}

impl GoalView {
    fn from_goal(goal: &Goal) -> Self {
        Self {
            id: Some(goal.id),
            title: goal.title.clone(),
            goal_type: goal.kind,
            progress: goal.progress_percentage(),
            completed: goal.completed,
            selected: goal.selected,
            order: Some(goal.sort_order),
        }
    }
}

/// The three goal lists backing the goals page.
#[derive(Debug, Clone, Serialize)]
pub struct GoalsOverview {
    /// The fixed catalog, overlaid with the user's matching rows.
    pub popular: Vec<GoalView>,
    /// User-created goals whose titles are not in the catalog.
    pub custom: Vec<GoalView>,
    /// All goals with `selected = true`.
    pub saved: Vec<GoalView>,
}

/// Result of a progress update.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResult {
    /// Derived 0-100 progress after the update.
    pub progress: i32,
    /// Completion flag after the update.
    pub completed: bool,
}

/// Manages a user's goals.
#[derive(Debug, Clone)]
pub struct GoalService {
    /// Goal repository.
    goal_repo: Arc<GoalRepository>,
}

impl GoalService {
    /// Creates a new goal service.
    pub fn new(goal_repo: Arc<GoalRepository>) -> Self {
        Self { goal_repo }
    }

    /// Builds the popular/custom/saved lists for the goals page.
    pub async fn list(&self, ctx: &RequestContext) -> Result<GoalsOverview, AppError> {
        let goals = self.goal_repo.list_by_user(ctx.user_id).await?;

        let by_title: HashMap<&str, &Goal> =
            goals.iter().map(|g| (g.title.as_str(), g)).collect();
        let catalog_titles: HashSet<&str> = POPULAR_GOALS.iter().map(|s| s.title).collect();

        let popular = POPULAR_GOALS
            .iter()
            .map(|seed| match by_title.get(seed.title) {
                Some(existing) => GoalView::from_goal(existing),
                None => GoalView {
                    id: None,
                    title: seed.title.to_string(),
                    goal_type: seed.kind,
                    progress: 0,
                    completed: false,
                    selected: false,
                    order: None,
                },
            })
            .collect();

        let custom = goals
            .iter()
            .filter(|g| !catalog_titles.contains(g.title.as_str()))
            .map(GoalView::from_goal)
            .collect();

        let saved = goals
            .iter()
            .filter(|g| g.selected)
            .map(GoalView::from_goal)
            .collect();

        Ok(GoalsOverview {
            popular,
            custom,
            saved,
        })
    }

    /// The top saved goals shown on the dashboard.
    pub async fn dashboard_goals(
        &self,
        ctx: &RequestContext,
        limit: i64,
    ) -> Result<Vec<GoalView>, AppError> {
        let goals = self.goal_repo.list_selected(ctx.user_id, Some(limit)).await?;
        Ok(goals.iter().map(GoalView::from_goal).collect())
    }

    /// Replaces the saved selection: re-marks the given existing ids and
    /// creates the new titles, appended after the current ordering.
    ///
    /// Catalog entries arrive as titles the first time they are picked,
    /// since they have no row yet; those are created with their catalog
    /// kind and target. Unknown titles become static custom goals.
    pub async fn save_selection(
        &self,
        ctx: &RequestContext,
        goal_ids: Vec<Uuid>,
        new_titles: Vec<String>,
    ) -> Result<(), AppError> {
        let titles = reconcile::normalize_titles(&new_titles);

        // Titles that already have a row are selected by id instead of
        // being created twice.
        let existing = self.goal_repo.list_by_user(ctx.user_id).await?;
        let known: HashMap<&str, Uuid> =
            existing.iter().map(|g| (g.title.as_str(), g.id)).collect();

        let mut ids = goal_ids;
        let mut to_create = Vec::new();
        for title in titles {
            match known.get(title.as_str()) {
                Some(id) if !ids.contains(id) => ids.push(*id),
                Some(_) => {}
                None => {
                    let seed = POPULAR_GOALS.iter().find(|s| s.title == title);
                    let kind = seed.map_or(GoalKind::Static, |s| s.kind);
                    let target = seed.and_then(|s| s.target_value);
                    to_create.push((title, kind, target));
                }
            }
        }

        self.goal_repo
            .save_selection(ctx.user_id, &ids, &to_create)
            .await?;

        info!(user_id = %ctx.user_id, selected = ids.len(), created = to_create.len(), "Goal selection saved");
        Ok(())
    }

    /// Updates progress on a progress-kind goal.
    pub async fn update_progress(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        percent: i32,
    ) -> Result<ProgressResult, AppError> {
        let mut goal = self.fetch_owned(ctx, id).await?;

        if goal.kind != GoalKind::Progress {
            return Err(AppError::validation("Not a progress goal"));
        }

        goal.apply_progress(percent);
        self.goal_repo.update_progress(&goal).await?;

        Ok(ProgressResult {
            progress: goal.progress_percentage(),
            completed: goal.completed,
        })
    }

    /// Toggles completion on a goal (static checkbox behavior).
    pub async fn toggle(&self, ctx: &RequestContext, id: Uuid) -> Result<bool, AppError> {
        let goal = self.fetch_owned(ctx, id).await?;
        let completed = !goal.completed;
        self.goal_repo.set_completed(goal.id, ctx.user_id, completed).await?;
        Ok(completed)
    }

    /// Deletes a goal.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.goal_repo.delete(id, ctx.user_id).await? {
            return Err(AppError::not_found("Goal not found"));
        }
        Ok(())
    }

    /// Applies a full ordering to the user's goals.
    pub async fn reorder(
        &self,
        ctx: &RequestContext,
        ordered_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        self.goal_repo.reorder(ctx.user_id, &ordered_ids).await
    }

    async fn fetch_owned(&self, ctx: &RequestContext, id: Uuid) -> Result<Goal, AppError> {
        self.goal_repo
            .find_by_user(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Goal not found"))
    }
}
