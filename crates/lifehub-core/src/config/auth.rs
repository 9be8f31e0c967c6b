//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign JWTs. Must be overridden in production.
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// Account activation token TTL in hours.
    #[serde(default = "default_activation_ttl")]
    pub activation_ttl_hours: u64,
    /// Minimum acceptable zxcvbn password score (0-4).
    #[serde(default = "default_min_password_score")]
    pub min_password_score: u8,
}

fn default_access_ttl() -> u64 {
    30
}

fn default_refresh_ttl() -> u64 {
    24 * 7
}

fn default_activation_ttl() -> u64 {
    48
}

fn default_min_password_score() -> u8 {
    3
}
