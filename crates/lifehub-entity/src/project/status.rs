//! Project status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Planned but not yet started.
    NotStarted,
    /// Actively being worked on.
    InProgress,
    /// Paused.
    OnHold,
    /// Finished. Completed projects are never overdue.
    Completed,
    /// Blocked on something external.
    Blocked,
}

impl ProjectStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = lifehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "planned" => Ok(Self::NotStarted),
            "in_progress" | "active" => Ok(Self::InProgress),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(lifehub_core::AppError::validation(format!(
                "Invalid project status: '{s}'. Expected one of: not_started, in_progress, on_hold, completed, blocked"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        // Historical revisions used "planned"/"active" for the same states.
        assert_eq!("planned".parse::<ProjectStatus>().unwrap(), ProjectStatus::NotStarted);
        assert_eq!("active".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert!("cancelled".parse::<ProjectStatus>().is_err());
    }
}
