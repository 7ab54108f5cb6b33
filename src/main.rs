//! Herald Server — Campaign Console Authentication Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use herald_auth::authenticator::Authenticator;
use herald_auth::password::SecretHasher;
use herald_auth::store::CredentialStore;
use herald_auth::token::{TokenDecoder, TokenEncoder};
use herald_core::config::AppConfig;
use herald_core::error::AppError;
use herald_database::DatabasePool;
use herald_database::repositories::account::AccountRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("HERALD_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
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
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Herald v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Secrets policy ───────────────────────────────────
    config.ensure_production_secrets()?;
    if config.auth.uses_development_pepper() {
        tracing::warn!("Development pepper in use; unsuitable for production");
    }
    if config.auth.uses_development_token_secret() {
        tracing::warn!("Development token signing secret in use; unsuitable for production");
    }

    // ── Step 2: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    herald_database::migration::run_migrations(db.pool()).await?;

    // ── Step 3: Auth system ──────────────────────────────────────
    let account_repo = Arc::new(AccountRepository::new(db.pool().clone()));
    let store: Arc<dyn CredentialStore> = account_repo;
    let hasher = Arc::new(SecretHasher::new(&config.auth)?);
    let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(store, hasher, token_encoder));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let state = herald_api::AppState {
        config: Arc::new(config.clone()),
        authenticator,
        tokens: token_decoder,
    };

    let app = herald_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Herald server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Herald server shut down gracefully");
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
