//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation for `AppError` and the
//! [`ApiErrorResponse`] body type live in `lifehub-core` (the crate that
//! owns `AppError`) so the trait implementation satisfies Rust's coherence
//! rules. They are re-exported here for ergonomic access from the API layer.

pub use lifehub_core::error::ApiErrorResponse;
