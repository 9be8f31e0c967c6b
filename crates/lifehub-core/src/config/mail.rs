//! Outgoing mail configuration.

use serde::{Deserialize, Serialize};

/// Settings for activation and notification mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Sender address used for outgoing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Public base URL used to build activation links.
    #[serde(default = "default_base_url")]
    pub activation_base_url: String,
}

fn default_from_address() -> String {
    "no-reply@lifehub.local".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
