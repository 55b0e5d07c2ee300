// ABOUTME: HTTP server lifecycle: bind, serve the router, and shut down gracefully
// ABOUTME: Also runs the periodic sweep of expired admin sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::resources::ServerResources;
use crate::routes::build_router;
use crate::session::SessionRegistry;
use anyhow::{Context, Result};
use folio_core::constants::session::PURGE_INTERVAL_SECS;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Serve the site backend until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.network.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "Folio server listening");

    let sweeper = tokio::spawn(sweep_expired_sessions(Arc::clone(&resources.sessions)));
    let app = build_router(resources);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error");

    sweeper.abort();
    info!("Folio server stopped");
    served
}

async fn sweep_expired_sessions(sessions: Arc<SessionRegistry>) {
    let mut interval = tokio::time::interval(Duration::from_secs(PURGE_INTERVAL_SECS));
    loop {
        interval.tick().await;
        let purged = sessions.purge_expired();
        if purged > 0 {
            debug!(purged, remaining = sessions.len(), "Purged expired admin sessions");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
