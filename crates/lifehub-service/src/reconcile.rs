//! The selection reconciler.
//!
//! Given the persisted set of titled items and a client-submitted ordered
//! list of desired titles, compute the minimal-churn plan that makes the
//! persisted set match the desired list: items whose titles were dropped
//! are deleted, surviving items take their submitted position, and unknown
//! titles become new items at their position. The repository applies a plan
//! inside a single transaction for the calling user.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// A persisted titled item, as seen by the planner.
#[derive(Debug, Clone)]
pub struct ExistingItem {
    /// Row id.
    pub id: Uuid,
    /// Reconciliation key.
    pub title: String,
}

/// The changes required to match a desired title list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Items to delete (titles no longer desired).
    pub delete: Vec<Uuid>,
    /// Surviving items and their new 0-based positions.
    pub reposition: Vec<(Uuid, i32)>,
    /// Titles to create, with their 0-based positions.
    pub create: Vec<(String, i32)>,
}

impl ReconcilePlan {
    /// Whether the plan changes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.reposition.is_empty() && self.create.is_empty()
    }
}

/// Trim whitespace, drop empties, and deduplicate preserving first
/// occurrence order.
pub fn normalize_titles(titles: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for title in titles {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            cleaned.push(trimmed.to_string());
        }
    }
    cleaned
}

/// Compute the plan that reconciles `existing` against `desired_titles`.
///
/// Duplicate submitted titles keep only their first occurrence's position.
/// An empty desired list deletes everything.
pub fn plan(existing: &[ExistingItem], desired_titles: &[String]) -> ReconcilePlan {
    let desired = normalize_titles(desired_titles);
    let keep: HashSet<&str> = desired.iter().map(String::as_str).collect();

    // First occurrence wins when the store holds duplicate titles.
    let mut by_title: HashMap<&str, Uuid> = HashMap::new();
    for item in existing {
        by_title.entry(item.title.as_str()).or_insert(item.id);
    }

    let mut result = ReconcilePlan::default();

    for item in existing {
        if !keep.contains(item.title.as_str()) {
            result.delete.push(item.id);
        }
    }

    for (idx, title) in desired.iter().enumerate() {
        match by_title.remove(title.as_str()) {
            Some(id) => result.reposition.push((id, idx as i32)),
            None => result.create.push((title.clone(), idx as i32)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> ExistingItem {
        ExistingItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
        }
    }

    fn titles(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_drop_keep_create() {
        let a = item("A");
        let b = item("B");
        let result = plan(&[a.clone(), b.clone()], &titles(&["B", "C"]));

        assert_eq!(result.delete, vec![a.id]);
        assert_eq!(result.reposition, vec![(b.id, 0)]);
        assert_eq!(result.create, vec![("C".to_string(), 1)]);
    }

    #[test]
    fn test_duplicate_titles_keep_first_position() {
        let result = plan(&[], &titles(&["X", "X"]));
        assert!(result.delete.is_empty());
        assert!(result.reposition.is_empty());
        assert_eq!(result.create, vec![("X".to_string(), 0)]);
    }

    #[test]
    fn test_empty_desired_deletes_everything() {
        let a = item("A");
        let b = item("B");
        let result = plan(&[a.clone(), b.clone()], &[]);
        assert_eq!(result.delete, vec![a.id, b.id]);
        assert!(result.reposition.is_empty());
        assert!(result.create.is_empty());
    }

    #[test]
    fn test_normalization_trims_and_drops_empties() {
        let normalized = normalize_titles(&titles(&["  Walk the dog ", "", "  ", "Walk the dog"]));
        assert_eq!(normalized, vec!["Walk the dog".to_string()]);
    }

    #[test]
    fn test_reorder_only() {
        let a = item("A");
        let b = item("B");
        let result = plan(&[a.clone(), b.clone()], &titles(&["B", "A"]));
        assert!(result.delete.is_empty());
        assert_eq!(result.reposition, vec![(b.id, 0), (a.id, 1)]);
        assert!(result.create.is_empty());
    }

    #[test]
    fn test_noop_for_identical_lists_still_repositions() {
        // Positions are rewritten even when unchanged; the repository write
        // is idempotent.
        let a = item("A");
        let result = plan(&[a.clone()], &titles(&["A"]));
        assert_eq!(result.reposition, vec![(a.id, 0)]);
    }

    #[test]
    fn test_duplicate_existing_titles_first_occurrence_survives() {
        let first = item("A");
        let second = item("A");
        let result = plan(&[first.clone(), second.clone()], &titles(&["A"]));
        // Only the first duplicate is repositioned; the second is left as-is
        // rather than deleted, since its title is still desired.
        assert_eq!(result.reposition, vec![(first.id, 0)]);
        assert!(result.delete.is_empty());
    }
}
