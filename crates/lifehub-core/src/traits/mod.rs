//! Trait seams for externally-provided collaborators.

pub mod mailer;

pub use mailer::Mailer;
