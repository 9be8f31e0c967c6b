//! The project access policy.
//!
//! One authority for project scoping: owners edit, stakeholders read,
//! administrators do both. The list query in the repository mirrors
//! [`can_view`].

use uuid::Uuid;

use lifehub_entity::project::Project;

/// Owner, stakeholder, or administrator.
pub fn can_view(project: &Project, stakeholders: &[Uuid], user_id: Uuid, is_admin: bool) -> bool {
    is_admin || project.owner_id == user_id || stakeholders.contains(&user_id)
}

/// Owner or administrator.
pub fn can_edit(project: &Project, user_id: Uuid, is_admin: bool) -> bool {
    is_admin || project.owner_id == user_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lifehub_entity::project::ProjectStatus;

    fn project(owner_id: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            owner_id,
            name: "Kitchen remodel".to_string(),
            description: String::new(),
            start_date: None,
            end_date: None,
            status: ProjectStatus::InProgress,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_views_and_edits() {
        let owner = Uuid::new_v4();
        let p = project(owner);
        assert!(can_view(&p, &[], owner, false));
        assert!(can_edit(&p, owner, false));
    }

    #[test]
    fn test_stakeholder_views_but_cannot_edit() {
        let stakeholder = Uuid::new_v4();
        let p = project(Uuid::new_v4());
        assert!(can_view(&p, &[stakeholder], stakeholder, false));
        assert!(!can_edit(&p, stakeholder, false));
    }

    #[test]
    fn test_outsider_sees_nothing() {
        let outsider = Uuid::new_v4();
        let p = project(Uuid::new_v4());
        assert!(!can_view(&p, &[Uuid::new_v4()], outsider, false));
        assert!(!can_edit(&p, outsider, false));
    }

    #[test]
    fn test_admin_bypasses_ownership() {
        let admin = Uuid::new_v4();
        let p = project(Uuid::new_v4());
        assert!(can_view(&p, &[], admin, true));
        assert!(can_edit(&p, admin, true));
    }
}
