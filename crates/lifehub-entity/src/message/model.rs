//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A directed message between two users.
///
/// Each party holds an independent soft-delete flag; `is_read` and
/// `archived` are shared. A message row is destroyed only by an explicit
/// permanent delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub recipient_id: Uuid,
    /// Subject line. Replies carry the `Re:` convention.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Opaque path reference to an attachment in external blob storage.
    pub attachment: Option<String>,
    /// Whether the recipient has read the message.
    pub is_read: bool,
    /// Whether the message has been archived.
    pub archived: bool,
    /// Sender's soft-delete flag.
    pub deleted_by_sender: bool,
    /// Recipient's soft-delete flag.
    pub deleted_by_recipient: bool,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Whether the given user is the sender or the recipient.
    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.recipient_id == user_id
    }

    /// Whether the message is soft-deleted from the given user's point of
    /// view. Non-parties are treated as deleted-for.
    pub fn is_deleted_for(&self, user_id: Uuid) -> bool {
        if user_id == self.sender_id {
            return self.deleted_by_sender;
        }
        if user_id == self.recipient_id {
            return self.deleted_by_recipient;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deleted_for_each_party() {
        let sender = Uuid::new_v4();
        let recipient = Uuid::new_v4();
        let msg = Message {
            id: Uuid::new_v4(),
            sender_id: sender,
            recipient_id: recipient,
            subject: "hello".to_string(),
            body: "hi".to_string(),
            attachment: None,
            is_read: false,
            archived: false,
            deleted_by_sender: true,
            deleted_by_recipient: false,
            created_at: Utc::now(),
        };

        assert!(msg.is_deleted_for(sender));
        assert!(!msg.is_deleted_for(recipient));
        assert!(msg.is_deleted_for(Uuid::new_v4()));
    }
}
