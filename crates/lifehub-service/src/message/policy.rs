//! The messaging visibility policy.
//!
//! The single authority for which messages a caller may see and which
//! transitions a caller may perform. Folder listing queries in the
//! repository mirror [`visible_in_folder`]; every mutation in the message
//! service goes through the functions here.

use uuid::Uuid;

use lifehub_entity::message::{Folder, Message};

/// Whether the caller may see this message at all (any folder).
pub fn can_view(msg: &Message, user_id: Uuid, is_admin: bool) -> bool {
    is_admin || msg.is_party(user_id)
}

/// Folder membership for one caller.
pub fn visible_in_folder(msg: &Message, folder: Folder, user_id: Uuid, is_admin: bool) -> bool {
    match folder {
        Folder::Inbox => {
            (msg.recipient_id == user_id || is_admin)
                && !msg.archived
                && !msg.deleted_by_recipient
        }
        Folder::Sent => (msg.sender_id == user_id || is_admin) && !msg.deleted_by_sender,
        Folder::Archive => {
            msg.archived
                && (is_admin || (msg.recipient_id == user_id && !msg.deleted_by_recipient))
        }
        Folder::Trash => {
            (is_admin && (msg.deleted_by_sender || msg.deleted_by_recipient))
                || (msg.sender_id == user_id && msg.deleted_by_sender)
                || (msg.recipient_id == user_id && msg.deleted_by_recipient)
        }
    }
}

/// Only the recipient may mark a message read.
pub fn can_mark_read(msg: &Message, user_id: Uuid) -> bool {
    msg.recipient_id == user_id
}

/// The recipient or an administrator may flip the archive flag.
pub fn can_toggle_archive(msg: &Message, user_id: Uuid, is_admin: bool) -> bool {
    is_admin || msg.recipient_id == user_id
}

/// A party or an administrator may permanently delete.
pub fn can_permanently_delete(msg: &Message, user_id: Uuid, is_admin: bool) -> bool {
    is_admin || msg.is_party(user_id)
}

/// Self-messaging is rejected at compose time.
pub fn compose_allowed(sender_id: Uuid, recipient_id: Uuid) -> bool {
    sender_id != recipient_id
}

/// Derive the recipient for a reply: the other party to the original.
/// Returns `None` when the caller is not a party.
pub fn reply_recipient(original: &Message, user_id: Uuid) -> Option<Uuid> {
    if user_id == original.recipient_id {
        Some(original.sender_id)
    } else if user_id == original.sender_id {
        Some(original.recipient_id)
    } else {
        None
    }
}

/// Set the soft-delete flag for every role the caller holds.
///
/// An administrator acts for both parties. Returns whether any flag
/// changed; an unchanged call is a no-op, not an error.
pub fn apply_soft_delete(msg: &mut Message, user_id: Uuid, is_admin: bool) -> bool {
    let mut changed = false;
    if (user_id == msg.sender_id || is_admin) && !msg.deleted_by_sender {
        msg.deleted_by_sender = true;
        changed = true;
    }
    if (user_id == msg.recipient_id || is_admin) && !msg.deleted_by_recipient {
        msg.deleted_by_recipient = true;
        changed = true;
    }
    changed
}

/// Inverse of [`apply_soft_delete`], same role gating.
pub fn apply_restore(msg: &mut Message, user_id: Uuid, is_admin: bool) -> bool {
    let mut changed = false;
    if (user_id == msg.sender_id || is_admin) && msg.deleted_by_sender {
        msg.deleted_by_sender = false;
        changed = true;
    }
    if (user_id == msg.recipient_id || is_admin) && msg.deleted_by_recipient {
        msg.deleted_by_recipient = false;
        changed = true;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct Parties {
        sender: Uuid,
        recipient: Uuid,
        outsider: Uuid,
    }

    fn parties() -> Parties {
        Parties {
            sender: Uuid::new_v4(),
            recipient: Uuid::new_v4(),
            outsider: Uuid::new_v4(),
        }
    }

    fn message(p: &Parties) -> Message {
        Message {
            id: Uuid::new_v4(),
            sender_id: p.sender,
            recipient_id: p.recipient,
            subject: "Weekly plan".to_string(),
            body: "See attached".to_string(),
            attachment: None,
            is_read: false,
            archived: false,
            deleted_by_sender: false,
            deleted_by_recipient: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_inbox_and_sent_membership() {
        let p = parties();
        let msg = message(&p);

        assert!(visible_in_folder(&msg, Folder::Inbox, p.recipient, false));
        assert!(!visible_in_folder(&msg, Folder::Inbox, p.sender, false));
        assert!(visible_in_folder(&msg, Folder::Sent, p.sender, false));
        assert!(!visible_in_folder(&msg, Folder::Sent, p.recipient, false));
        assert!(!visible_in_folder(&msg, Folder::Inbox, p.outsider, false));
    }

    #[test]
    fn test_recipient_delete_moves_to_trash_without_touching_sender_view() {
        let p = parties();
        let mut msg = message(&p);
        assert!(apply_soft_delete(&mut msg, p.recipient, false));

        // Gone from the recipient's inbox and archive, present in trash.
        assert!(!visible_in_folder(&msg, Folder::Inbox, p.recipient, false));
        assert!(!visible_in_folder(&msg, Folder::Archive, p.recipient, false));
        assert!(visible_in_folder(&msg, Folder::Trash, p.recipient, false));

        // The sender's view is unaffected.
        assert!(visible_in_folder(&msg, Folder::Sent, p.sender, false));
        assert!(!visible_in_folder(&msg, Folder::Trash, p.sender, false));
    }

    #[test]
    fn test_soft_delete_is_idempotent_noop() {
        let p = parties();
        let mut msg = message(&p);
        assert!(apply_soft_delete(&mut msg, p.sender, false));
        assert!(!apply_soft_delete(&mut msg, p.sender, false));
    }

    #[test]
    fn test_restore_inverts_soft_delete() {
        let p = parties();
        let mut msg = message(&p);
        apply_soft_delete(&mut msg, p.recipient, false);
        assert!(apply_restore(&mut msg, p.recipient, false));
        assert!(visible_in_folder(&msg, Folder::Inbox, p.recipient, false));
        assert!(!visible_in_folder(&msg, Folder::Trash, p.recipient, false));
    }

    #[test]
    fn test_admin_soft_delete_acts_for_both_parties() {
        let p = parties();
        let mut msg = message(&p);
        let admin = Uuid::new_v4();
        assert!(apply_soft_delete(&mut msg, admin, true));
        assert!(msg.deleted_by_sender);
        assert!(msg.deleted_by_recipient);
    }

    #[test]
    fn test_outsider_cannot_soft_delete() {
        let p = parties();
        let mut msg = message(&p);
        assert!(!apply_soft_delete(&mut msg, p.outsider, false));
        assert!(!msg.deleted_by_sender);
        assert!(!msg.deleted_by_recipient);
    }

    #[test]
    fn test_archive_folder_is_recipient_scoped() {
        let p = parties();
        let mut msg = message(&p);
        msg.archived = true;

        assert!(visible_in_folder(&msg, Folder::Archive, p.recipient, false));
        assert!(!visible_in_folder(&msg, Folder::Archive, p.sender, false));
        assert!(visible_in_folder(&msg, Folder::Archive, p.outsider, true));
        assert!(!visible_in_folder(&msg, Folder::Inbox, p.recipient, false));
    }

    #[test]
    fn test_archive_toggle_gating() {
        let p = parties();
        let msg = message(&p);
        assert!(can_toggle_archive(&msg, p.recipient, false));
        assert!(!can_toggle_archive(&msg, p.sender, false));
        assert!(can_toggle_archive(&msg, p.outsider, true));
    }

    #[test]
    fn test_mark_read_is_recipient_only() {
        let p = parties();
        let msg = message(&p);
        assert!(can_mark_read(&msg, p.recipient));
        assert!(!can_mark_read(&msg, p.sender));
        assert!(!can_mark_read(&msg, p.outsider));
    }

    #[test]
    fn test_compose_rejects_self() {
        let user = Uuid::new_v4();
        assert!(!compose_allowed(user, user));
        assert!(compose_allowed(user, Uuid::new_v4()));
    }

    #[test]
    fn test_reply_recipient_is_the_other_party() {
        let p = parties();
        let msg = message(&p);
        assert_eq!(reply_recipient(&msg, p.recipient), Some(p.sender));
        assert_eq!(reply_recipient(&msg, p.sender), Some(p.recipient));
        assert_eq!(reply_recipient(&msg, p.outsider), None);
    }

    #[test]
    fn test_permanent_delete_gating() {
        let p = parties();
        let msg = message(&p);
        assert!(can_permanently_delete(&msg, p.sender, false));
        assert!(can_permanently_delete(&msg, p.recipient, false));
        assert!(!can_permanently_delete(&msg, p.outsider, false));
        assert!(can_permanently_delete(&msg, p.outsider, true));
    }
}
