//! HTTP server initialization and runtime setup.
//!
//! Builds the services, wraps the router in rate limiting and path
//! normalization, and serves until SIGINT or SIGTERM.

use crate::alias::{RandomTokens, SystemClock};
use crate::api::middleware::rate_limit;
use crate::application::services::{AliasService, AuthService};
use crate::config::Config;
use crate::infrastructure::MxrouteClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MXroute API client
/// - Alias and auth services
/// - Per-IP rate limiting (proxy-aware if `BEHIND_PROXY` is set)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The MXroute client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let provider =
        MxrouteClient::new(&config.mxroute).context("Failed to build MXroute client")?;
    tracing::info!("MXroute client ready for {}", config.mxroute.server);

    let alias_service = AliasService::new(
        Arc::new(provider),
        Arc::new(SystemClock),
        Arc::new(RandomTokens),
    );
    let auth_service = AuthService::new(&config.server_api_token);

    let state = AppState::new(Arc::new(alias_service), Arc::new(auth_service));

    let router = app_router(state);
    let router = if config.behind_proxy {
        tracing::info!("Rate limiting by forwarded client IP");
        router.layer(rate_limit::proxied_layer())
    } else {
        router.layer(rate_limit::layer())
    };
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
