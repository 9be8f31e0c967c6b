//! Goal entity model and the progress engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::GoalKind;

/// A user's goal: either a checkbox (`static`) or a numeric target
/// (`progress`) tracked as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    /// Unique goal identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Goal title. Titles identify goals during selection reconciliation.
    pub title: String,
    /// How completion is tracked.
    pub kind: GoalKind,
    /// Target value for progress goals.
    pub target_value: Option<i32>,
    /// Current value for progress goals.
    pub current_value: i32,
    /// Whether the goal is completed.
    pub completed: bool,
    /// Membership in the user's curated saved list.
    pub selected: bool,
    /// Position within the user's ordering.
    pub sort_order: i32,
    /// When the goal was created.
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Return 0-100% progress.
    ///
    /// Static goals are all-or-nothing: 100 when completed, else 0.
    /// Progress goals derive the percentage from current/target, rounded
    /// and clamped to [0, 100]; a missing or zero target yields 0.
    pub fn progress_percentage(&self) -> i32 {
        match self.kind {
            GoalKind::Static => {
                if self.completed {
                    100
                } else {
                    0
                }
            }
            GoalKind::Progress => match self.target_value {
                Some(target) if target > 0 => {
                    let pct = (f64::from(self.current_value) / f64::from(target)) * 100.0;
                    (pct.round() as i32).clamp(0, 100)
                }
                _ => 0,
            },
        }
    }

    /// Apply a requested progress percentage to this goal.
    ///
    /// The request is clamped to [0, 100]. When a target value is set, the
    /// stored `current_value` is rescaled into target units (rounded);
    /// otherwise the percentage is stored directly. Completion follows from
    /// reaching 100.
    pub fn apply_progress(&mut self, requested_percent: i32) {
        let percent = requested_percent.clamp(0, 100);

        self.current_value = match self.target_value {
            Some(target) if target > 0 => {
                ((f64::from(percent) / 100.0) * f64::from(target)).round() as i32
            }
            _ => percent,
        };
        self.completed = percent >= 100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(kind: GoalKind, target: Option<i32>, current: i32, completed: bool) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Read 20 pages".to_string(),
            kind,
            target_value: target,
            current_value: current,
            completed,
            selected: false,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_static_progress_is_all_or_nothing() {
        assert_eq!(goal(GoalKind::Static, None, 0, false).progress_percentage(), 0);
        assert_eq!(goal(GoalKind::Static, None, 0, true).progress_percentage(), 100);
    }

    #[test]
    fn test_progress_percentage_rounds() {
        // 1/3 of the target rounds to 33, 2/3 rounds to 67.
        assert_eq!(goal(GoalKind::Progress, Some(3), 1, false).progress_percentage(), 33);
        assert_eq!(goal(GoalKind::Progress, Some(3), 2, false).progress_percentage(), 67);
    }

    #[test]
    fn test_progress_percentage_clamps_overshoot() {
        assert_eq!(goal(GoalKind::Progress, Some(10), 25, false).progress_percentage(), 100);
    }

    #[test]
    fn test_progress_without_target_is_zero() {
        assert_eq!(goal(GoalKind::Progress, None, 50, false).progress_percentage(), 0);
        assert_eq!(goal(GoalKind::Progress, Some(0), 50, false).progress_percentage(), 0);
    }

    #[test]
    fn test_apply_progress_scales_to_target() {
        let mut g = goal(GoalKind::Progress, Some(8), 0, false);
        g.apply_progress(50);
        assert_eq!(g.current_value, 4);
        assert!(!g.completed);

        g.apply_progress(100);
        assert_eq!(g.current_value, 8);
        assert!(g.completed);
        assert_eq!(g.progress_percentage(), 100);
    }

    #[test]
    fn test_apply_progress_without_target_stores_percent() {
        let mut g = goal(GoalKind::Progress, None, 0, false);
        g.apply_progress(75);
        assert_eq!(g.current_value, 75);
        assert!(!g.completed);
    }

    #[test]
    fn test_apply_progress_clamps_request() {
        let mut g = goal(GoalKind::Progress, Some(20), 0, false);
        g.apply_progress(250);
        assert_eq!(g.current_value, 20);
        assert!(g.completed);

        g.apply_progress(-10);
        assert_eq!(g.current_value, 0);
        assert!(!g.completed);
    }
}
