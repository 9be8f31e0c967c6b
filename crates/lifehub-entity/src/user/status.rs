//! User account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Registered but not yet activated via the emailed link.
    PendingActivation,
    /// Activated and allowed to log in.
    Active,
    /// Disabled by an administrator.
    Disabled,
}

impl UserStatus {
    /// Whether an account in this status may log in.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingActivation => "pending_activation",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_login() {
        assert!(UserStatus::Active.can_login());
        assert!(!UserStatus::PendingActivation.can_login());
        assert!(!UserStatus::Disabled.can_login());
    }
}
