//! # lifehub-api
//!
//! HTTP API layer for LifeHub: the Axum router, shared application state,
//! request/response DTOs, extractors, middleware, and the mapping from
//! domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
