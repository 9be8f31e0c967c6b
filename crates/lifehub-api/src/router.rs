//! Route definitions for the LifeHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(dashboard_routes())
        .merge(goal_routes())
        .merge(task_routes())
        .merge(note_routes())
        .merge(message_routes())
        .merge(project_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Account endpoints: signup, activation, login, refresh, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/activate", post(handlers::auth::activate))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route("/users/me", put(handlers::auth::update_profile))
}

/// Dashboard overview
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::home))
}

/// Goal listing, selection save, progress, toggle, reorder
fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(handlers::goal::list_goals))
        .route("/goals/selection", post(handlers::goal::save_selection))
        .route("/goals/reorder", put(handlers::goal::reorder_goals))
        .route("/goals/{id}/progress", put(handlers::goal::update_progress))
        .route("/goals/{id}/toggle", put(handlers::goal::toggle_goal))
        .route("/goals/{id}", delete(handlers::goal::delete_goal))
}

/// Task listing, reconciled selection save, toggle, reorder
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(handlers::task::list_tasks))
        .route("/tasks/selection", post(handlers::task::save_selection))
        .route("/tasks/reorder", put(handlers::task::reorder_tasks))
        .route("/tasks/{id}/toggle", put(handlers::task::toggle_task))
        .route("/tasks/{id}", delete(handlers::task::delete_task))
}

/// Note CRUD
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(handlers::note::list_notes))
        .route("/notes", post(handlers::note::create_note))
        .route("/notes/{id}/toggle", put(handlers::note::toggle_note))
        .route("/notes/{id}", delete(handlers::note::delete_note))
}

/// Message folders, compose/reply, and flag transitions
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(handlers::message::compose))
        .route(
            "/messages/unread-count",
            get(handlers::message::unread_count),
        )
        .route("/messages/{folder}", get(handlers::message::list_folder))
        .route("/messages/id/{id}", get(handlers::message::detail))
        .route("/messages/id/{id}", delete(handlers::message::soft_delete))
        .route("/messages/id/{id}/reply", post(handlers::message::reply))
        .route("/messages/id/{id}/read", put(handlers::message::mark_read))
        .route(
            "/messages/id/{id}/archive",
            put(handlers::message::toggle_archive),
        )
        .route(
            "/messages/id/{id}/restore",
            put(handlers::message::restore),
        )
        .route(
            "/messages/id/{id}/permanent",
            delete(handlers::message::permanent_delete),
        )
}

/// Project CRUD and the project message board
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects", post(handlers::project::create_project))
        .route("/projects/{id}", get(handlers::project::get_project))
        .route("/projects/{id}", put(handlers::project::update_project))
        .route("/projects/{id}", delete(handlers::project::delete_project))
        .route(
            "/projects/{id}/messages",
            get(handlers::project::list_project_messages),
        )
        .route(
            "/projects/{id}/messages",
            post(handlers::project::post_project_message),
        )
        .route(
            "/projects/messages/{id}/archive",
            put(handlers::project::archive_project_message),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
