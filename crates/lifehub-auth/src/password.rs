//! Argon2id password hashing, verification, and strength enforcement.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use lifehub_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Minimum acceptable zxcvbn score (0-4).
    min_score: u8,
}

impl PasswordHasher {
    /// Creates a new password hasher with the given minimum strength score.
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Rejects passwords below the configured zxcvbn score.
    ///
    /// Username and email are fed to the estimator so that passwords derived
    /// from them score poorly.
    pub fn check_strength(
        &self,
        password: &str,
        username: &str,
        email: &str,
    ) -> Result<(), AppError> {
        let entropy = zxcvbn::zxcvbn(password, &[username, email]);
        let min = match self.min_score {
            0 => zxcvbn::Score::Zero,
            1 => zxcvbn::Score::One,
            2 => zxcvbn::Score::Two,
            3 => zxcvbn::Score::Three,
            _ => zxcvbn::Score::Four,
        };
        if entropy.score() < min {
            return Err(AppError::validation(
                "Password is too weak; choose a longer or less predictable one",
            ));
        }
        Ok(())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = PasswordHasher::new(3);
        let hash = hasher.hash_password("correct horse battery staple").unwrap();
        assert!(hasher.verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!hasher.verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_weak_password_rejected() {
        let hasher = PasswordHasher::new(3);
        assert!(hasher.check_strength("password1", "alice", "a@b.c").is_err());
        assert!(
            hasher
                .check_strength("correct horse battery staple", "alice", "a@b.c")
                .is_ok()
        );
    }

    #[test]
    fn test_password_derived_from_username_rejected() {
        let hasher = PasswordHasher::new(3);
        assert!(
            hasher
                .check_strength("alice.smith.2024", "alice.smith.2024", "a@b.c")
                .is_err()
        );
    }
}
