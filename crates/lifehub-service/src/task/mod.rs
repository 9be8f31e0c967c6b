//! Tasks: seeded listing and reconciled selection save.

pub mod service;

pub use service::{TaskService, TaskView, TasksOverview};
