//! Message folder enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four virtual folders a message can appear in.
///
/// Folders are views over message flags, not stored state; the visibility
/// policy decides membership per caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Unarchived received mail.
    Inbox,
    /// Mail the caller sent.
    Sent,
    /// Archived received mail.
    Archive,
    /// Soft-deleted mail, per party.
    Trash,
}

impl Folder {
    /// Return the folder as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Archive => "archive",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Folder {
    type Err = lifehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "archive" => Ok(Self::Archive),
            "trash" => Ok(Self::Trash),
            _ => Err(lifehub_core::AppError::validation(format!(
                "Invalid folder: '{s}'. Expected one of: inbox, sent, archive, trash"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("inbox".parse::<Folder>().unwrap(), Folder::Inbox);
        assert_eq!("Trash".parse::<Folder>().unwrap(), Folder::Trash);
        assert!("spam".parse::<Folder>().is_err());
    }
}
