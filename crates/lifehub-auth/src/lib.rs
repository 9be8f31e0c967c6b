//! # lifehub-auth
//!
//! Authentication primitives for LifeHub: Argon2id password hashing with
//! zxcvbn strength enforcement, JWT access/refresh tokens, and the
//! purpose-scoped account activation token.

pub mod activation;
pub mod password;
pub mod token;

pub use activation::ActivationTokens;
pub use password::PasswordHasher;
pub use token::{Claims, TokenPair, TokenType, Tokens};
