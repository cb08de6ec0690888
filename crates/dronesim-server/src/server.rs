//! HTTP server lifecycle.
//!
//! Startup is split in two so the bound address is known before any
//! request is served: [`bind_listener`] resolves and binds the configured
//! address, then [`serve`] runs the router on it until `Ctrl-C`.

use std::net::SocketAddr;
use std::sync::Arc;

use dronesim_core::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Errors raised while binding or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `host:port` did not form a socket address.
    #[error("invalid listen address {addr:?}: {source}")]
    Address {
        /// The rejected `host:port` string.
        addr: String,
        /// Why it was rejected.
        source: std::net::AddrParseError,
    },

    /// The address parsed but could not be bound.
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// The address that was tried.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The listener failed while serving.
    #[error("serve error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind a TCP listener on `config.host:config.port`.
///
/// Port 0 picks an ephemeral port; read it back with
/// [`TcpListener::local_addr`].
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = raw
        .parse()
        .map_err(|source| ServerError::Address { addr: raw, source })?;

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the drone API on `listener` until `Ctrl-C`.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Drone simulator listening");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Drone simulator stopped");
    Ok(())
}

/// Resolves on `Ctrl-C`. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
