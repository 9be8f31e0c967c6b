//! Default mailer that writes outgoing mail to the log.
//!
//! Real delivery is an external collaborator; in development and tests the
//! activation link shows up in the server log.

use async_trait::async_trait;
use tracing::info;

use lifehub_core::error::AppError;
use lifehub_core::traits::Mailer;

/// Logs outgoing mail instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct TracingMailer;

#[async_trait]
impl Mailer for TracingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError> {
        info!(to = %to, subject = %subject, body = %body, "Outgoing mail");
        Ok(())
    }
}
