//! Account lifecycle: signup, activation, login, and profile.

pub mod mailer;
pub mod service;

pub use mailer::TracingMailer;
pub use service::AccountService;
