//! Goals: catalog-backed listing, selection save, and the progress engine.

pub mod service;

pub use service::{GoalService, GoalView, GoalsOverview};
