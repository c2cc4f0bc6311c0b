use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::handlers::health::health_check;
use crate::middleware::{LoggingLayer, RequestIdLayer};

/// Creates the router: `/health` plus the request id and logging middleware.
///
/// Unknown paths and methods fall through to axum's defaults (404 and 405).
pub fn create_router() -> Router {
    with_middleware(routes())
}

/// Creates the router with the hardening options from `config` applied.
pub fn create_router_with_config(config: &ServerConfig) -> Router {
    with_middleware(with_timeout(routes(), config.request_timeout()))
}

fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Requests still running after `timeout` are answered with 408.
fn with_timeout(router: Router, timeout: Option<Duration>) -> Router {
    match timeout {
        Some(timeout) => router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        )),
        None => router,
    }
}

fn with_middleware(router: Router) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    router.layer(middleware_stack)
}

/// Binds the TCP listener. Failing here is fatal: nothing has been served yet.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener` until SIGINT or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// Serves `app` on `listener` until `signal` resolves, then drains in-flight
/// requests.
pub async fn serve_with_shutdown<F>(listener: TcpListener, app: Router, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(addr = %local_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves the listen address from `config`, binds it and serves until a
/// shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = create_router_with_config(&config);

    let listener = bind(addr).await?;
    serve(listener, app).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
