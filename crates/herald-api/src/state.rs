//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use herald_auth::authenticator::Authenticator;
use herald_auth::token::TokenDecoder;
use herald_core::config::AppConfig;

/// Shared state threaded through every route.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Registration and login flows.
    pub authenticator: Arc<Authenticator>,
    /// Session token validator for protected routes.
    pub tokens: Arc<TokenDecoder>,
}
