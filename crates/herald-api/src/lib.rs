//! # herald-api
//!
//! HTTP API layer for Herald built on Axum.
//!
//! Provides the auth endpoints, health check, middleware (request logging,
//! CORS), the bearer-token extractor, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
