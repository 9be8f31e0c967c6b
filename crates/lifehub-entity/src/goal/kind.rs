//! Goal kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a goal's completion is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "goal_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Checkbox goal: either done or not.
    Static,
    /// Numeric goal tracked as a percentage toward a target value.
    Progress,
}

impl GoalKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Progress => "progress",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalKind {
    type Err = lifehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "progress" => Ok(Self::Progress),
            _ => Err(lifehub_core::AppError::validation(format!(
                "Invalid goal kind: '{s}'. Expected one of: static, progress"
            ))),
        }
    }
}
