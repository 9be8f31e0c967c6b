//! # lifehub-service
//!
//! Business logic for LifeHub. Each service orchestrates repositories and
//! auth primitives behind an explicit [`context::RequestContext`]; the pure
//! decision logic — the selection reconciler, the messaging visibility
//! policy, and the project access policy — lives in plain modules so it can
//! be tested without a database.

pub mod account;
pub mod catalog;
pub mod context;
pub mod goal;
pub mod message;
pub mod note;
pub mod project;
pub mod reconcile;
pub mod task;
