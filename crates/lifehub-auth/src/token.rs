//! JWT access/refresh token creation and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifehub_core::config::auth::AuthConfig;
use lifehub_core::error::AppError;
use lifehub_entity::user::UserRole;

/// Distinguishes access from refresh tokens so one cannot stand in for the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token presented on every request.
    Access,
    /// Long-lived token exchanged for fresh access tokens.
    Refresh,
}

/// Claims carried by LifeHub JWTs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user id.
    pub sub: Uuid,
    /// The user's role at issue time.
    pub role: UserRole,
    /// The username (convenience field).
    pub username: String,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
    /// Access or refresh.
    pub token_type: TokenType,
}

/// A freshly issued access + refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Creates and validates signed JWTs.
#[derive(Clone)]
pub struct Tokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_minutes: i64,
    refresh_ttl_hours: i64,
}

impl Tokens {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.jwt_access_ttl_minutes as i64,
            refresh_ttl_hours: config.jwt_refresh_ttl_hours as i64,
        }
    }

    /// Generates a new access + refresh token pair for the given user.
    pub fn generate_token_pair(
        &self,
        user_id: Uuid,
        role: UserRole,
        username: &str,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let refresh_exp = now + chrono::Duration::hours(self.refresh_ttl_hours);

        let access_token = self.encode(Claims {
            sub: user_id,
            role,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        })?;

        let refresh_token = self.encode(Claims {
            sub: user_id,
            role,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        })?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }

    /// Decodes and validates a token, checking it is of the expected type.
    pub fn decode(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AppError::unauthorized(format!("Invalid token: {e}")))?;

        if data.claims.token_type != expected {
            return Err(AppError::unauthorized("Wrong token type"));
        }

        Ok(data.claims)
    }

    fn encode(&self, claims: Claims) -> Result<String, AppError> {
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
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
    fn test_token_pair_roundtrip() {
        let tokens = Tokens::new(&config());
        let user_id = Uuid::new_v4();
        let pair = tokens
            .generate_token_pair(user_id, UserRole::Member, "alice")
            .unwrap();

        let claims = tokens.decode(&pair.access_token, TokenType::Access).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, UserRole::Member);
    }

    #[test]
    fn test_refresh_token_cannot_act_as_access() {
        let tokens = Tokens::new(&config());
        let pair = tokens
            .generate_token_pair(Uuid::new_v4(), UserRole::Member, "alice")
            .unwrap();

        assert!(tokens.decode(&pair.refresh_token, TokenType::Access).is_err());
        assert!(tokens.decode(&pair.refresh_token, TokenType::Refresh).is_ok());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = Tokens::new(&config());
        assert!(tokens.decode("not-a-jwt", TokenType::Access).is_err());
    }
}
