//! Outgoing mail seam.
//!
//! Actual delivery is an external collaborator; the application only needs
//! a fire-and-forget send. Implementations must be cheap to clone behind an
//! `Arc<dyn Mailer>`.

use async_trait::async_trait;

use crate::error::AppError;

/// Sends a single plain-text mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver `body` to `to` with the given subject.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError>;
}
