//! Projects: access policy and service.

pub mod access;
pub mod service;

pub use service::{ProjectInput, ProjectService, ProjectView};
