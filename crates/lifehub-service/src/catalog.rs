//! Fixed catalogs of popular goals and tasks.
//!
//! Popular goals are never persisted up front; the goal listing synthesizes
//! them from this catalog and overlays the user's rows by title. Popular
//! tasks are seeded into the store the first time a user with no tasks
//! loads their dashboard or task page.

use lifehub_entity::goal::GoalKind;

/// A catalog entry for a popular goal.
#[derive(Debug, Clone, Copy)]
pub struct GoalSeed {
    /// Display title; also the reconciliation key.
    pub title: &'static str,
    /// How the goal tracks completion.
    pub kind: GoalKind,
    /// Target value for progress goals.
    pub target_value: Option<i32>,
}

/// The 20 popular goals offered to every user.
pub const POPULAR_GOALS: [GoalSeed; 20] = [
    GoalSeed { title: "Drink 8 glasses of water", kind: GoalKind::Progress, target_value: Some(8) },
    GoalSeed { title: "Read 20 pages", kind: GoalKind::Progress, target_value: Some(20) },
    GoalSeed { title: "Walk 2000 steps", kind: GoalKind::Progress, target_value: Some(2000) },
    GoalSeed { title: "Meditate 10 minutes", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Sleep 8 hours", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Limit screen time", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Exercise 20 minutes", kind: GoalKind::Progress, target_value: Some(20) },
    GoalSeed { title: "Plan tomorrow in advance", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Practice gratitude", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "No junk food today", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Journal for 5 minutes", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Clean your workspace", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Reach protein goal", kind: GoalKind::Progress, target_value: Some(100) },
    GoalSeed { title: "Take vitamins", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Learn or study 30 min", kind: GoalKind::Progress, target_value: Some(30) },
    GoalSeed { title: "Practice hobby (art/music/etc.)", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Go outside for fresh air", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Deep clean 1 small area", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Message a friend or family member", kind: GoalKind::Static, target_value: None },
    GoalSeed { title: "Track spending", kind: GoalKind::Static, target_value: None },
];

/// The 15 popular tasks seeded for new users.
pub const POPULAR_TASKS: [&str; 15] = [
    "Walk the dog",
    "Make the bed",
    "Do the dishes",
    "Check emails",
    "Go for a run",
    "Water the plants",
    "Plan meals",
    "Clean the kitchen",
    "Read for 20 minutes",
    "Call a family member",
    "Meditate",
    "Take vitamins",
    "Do laundry",
    "Tidy workspace",
    "Pay bills",
];
