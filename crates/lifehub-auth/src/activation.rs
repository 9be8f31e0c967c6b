//! Account activation tokens.
//!
//! A purpose-scoped, short-TTL JWT emailed to new users. The purpose claim
//! keeps an activation token from being replayed as an access token and
//! vice versa.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifehub_core::config::auth::AuthConfig;
use lifehub_core::error::AppError;

const ACTIVATION_PURPOSE: &str = "account_activation";

/// Claims carried by an activation token.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActivationClaims {
    sub: Uuid,
    purpose: String,
    iat: i64,
    exp: i64,
}

/// Creates and validates account activation tokens.
#[derive(Clone)]
pub struct ActivationTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl ActivationTokens {
    /// Creates an activation token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.activation_ttl_hours as i64,
        }
    }

    /// Issues an activation token for a newly registered user.
    pub fn generate(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = ActivationClaims {
            sub: user_id,
            purpose: ACTIVATION_PURPOSE.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.ttl_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode activation token: {e}")))
    }

    /// Validates a token and returns the user it activates.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let data = decode::<ActivationClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::unauthorized("Activation link is invalid or expired"))?;

        if data.claims.purpose != ACTIVATION_PURPOSE {
            return Err(AppError::unauthorized("Activation link is invalid or expired"));
        }

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-not-for-production".to_string(),
            jwt_access_ttl_minutes: 30,
            jwt_refresh_ttl_hours: 168,
            activation_ttl_hours: 48,
            min_password_score: 3,
        }
    }

    #[test]
    fn test_roundtrip() {
        let tokens = ActivationTokens::new(&config());
        let user_id = Uuid::new_v4();
        let token = tokens.generate(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_access_token_is_not_an_activation_token() {
        let auth = config();
        let access = crate::token::Tokens::new(&auth)
            .generate_token_pair(Uuid::new_v4(), lifehub_entity::user::UserRole::Member, "a")
            .unwrap();
        let tokens = ActivationTokens::new(&auth);
        assert!(tokens.verify(&access.access_token).is_err());
    }
}
