//! Health Server - minimal HTTP liveness service.
//!
//! Serves a single endpoint, `GET /health`, answering with a constant
//! `{"status":"OK WORKING"}` payload. Everything else falls through to
//! axum's default 404/405 handling.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use crate::config::ServerConfig;
pub use error::{Result, ServerError};
pub use handlers::health::{HEALTH_STATUS, HealthResponse, health_check};
pub use server::{
    bind, create_router, create_router_with_config, run_server, serve, serve_with_shutdown,
};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
