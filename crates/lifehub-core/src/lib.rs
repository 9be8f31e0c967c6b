//! # lifehub-core
//!
//! Core crate for LifeHub. Contains configuration schemas, the unified
//! error system, pagination types, and the mailer trait seam.
//!
//! This crate has **no** internal dependencies on other LifeHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
