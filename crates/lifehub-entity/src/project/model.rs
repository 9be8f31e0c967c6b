//! Project entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ProjectStatus;

/// A lightweight tracked project.
///
/// Owned by one user; visible to the owner, the stakeholder set, and
/// administrators. The stakeholder set lives in a join table and is loaded
/// separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Current status.
    pub status: ProjectStatus,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether the project has slipped past its end date without being
    /// completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => end < today && self.status != ProjectStatus::Completed,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(end_date: Option<NaiveDate>, status: ProjectStatus) -> Project {
        Project {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Garden overhaul".to_string(),
            description: String::new(),
            start_date: None,
            end_date,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_requires_past_end_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();

        assert!(project(Some(yesterday), ProjectStatus::InProgress).is_overdue(today));
        assert!(!project(Some(today), ProjectStatus::InProgress).is_overdue(today));
        assert!(!project(Some(tomorrow), ProjectStatus::InProgress).is_overdue(today));
        assert!(!project(None, ProjectStatus::InProgress).is_overdue(today));
    }

    #[test]
    fn test_completed_projects_are_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert!(!project(Some(yesterday), ProjectStatus::Completed).is_overdue(today));
    }
}
