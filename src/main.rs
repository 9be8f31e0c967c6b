//! LifeHub Server — Personal Productivity Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use lifehub_core::config::AppConfig;
use lifehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("LIFEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LifeHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = lifehub_database::connection::create_pool(&config.database).await?;
    lifehub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(lifehub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let goal_repo = Arc::new(lifehub_database::repositories::goal::GoalRepository::new(
        db_pool.clone(),
    ));
    let task_repo = Arc::new(lifehub_database::repositories::task::TaskRepository::new(
        db_pool.clone(),
    ));
    let note_repo = Arc::new(lifehub_database::repositories::note::NoteRepository::new(
        db_pool.clone(),
    ));
    let message_repo = Arc::new(
        lifehub_database::repositories::message::MessageRepository::new(db_pool.clone()),
    );
    let project_repo = Arc::new(
        lifehub_database::repositories::project::ProjectRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(lifehub_auth::password::PasswordHasher::new(
        config.auth.min_password_score,
    ));
    let tokens = Arc::new(lifehub_auth::token::Tokens::new(&config.auth));
    let activation = Arc::new(lifehub_auth::activation::ActivationTokens::new(&config.auth));

    // ── Step 4: Services ─────────────────────────────────────────
    let mailer: Arc<dyn lifehub_core::traits::Mailer> =
        Arc::new(lifehub_service::account::TracingMailer);

    let account_service = Arc::new(lifehub_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&tokens),
        Arc::clone(&activation),
        Arc::clone(&mailer),
        config.mail.clone(),
    ));
    let goal_service = Arc::new(lifehub_service::goal::GoalService::new(Arc::clone(
        &goal_repo,
    )));
    let task_service = Arc::new(lifehub_service::task::TaskService::new(Arc::clone(
        &task_repo,
    )));
    let note_service = Arc::new(lifehub_service::note::NoteService::new(Arc::clone(
        &note_repo,
    )));
    let message_service = Arc::new(lifehub_service::message::MessageService::new(
        Arc::clone(&message_repo),
        Arc::clone(&user_repo),
    ));
    let project_service = Arc::new(lifehub_service::project::ProjectService::new(Arc::clone(
        &project_repo,
    )));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let app_state = lifehub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        tokens,
        activation,
        password_hasher,
        account_service,
        goal_service,
        task_service,
        note_service,
        message_service,
        project_service,
    };

    let app = lifehub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LifeHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("LifeHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
