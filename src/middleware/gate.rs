// ABOUTME: Axum middleware that runs the route access gate on every inbound request
// ABOUTME: Reads the credential cookie, consults the verifier, and redirects or forwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Route gate middleware
//!
//! Installed as the outermost routing concern so that every path, matched or
//! not, is evaluated before any handler runs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use folio_server::config::ServerConfig;
//! use folio_server::middleware::gate::gate_middleware;
//! use folio_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! let resources = Arc::new(ServerResources::in_memory(ServerConfig::default()));
//! let app: Router = Router::new()
//!     .route("/dashboard", get(|| async { "admin" }))
//!     .layer(middleware::from_fn_with_state(resources, gate_middleware));
//! ```

use crate::gate::{evaluate, GateDecision, SessionState};
use crate::resources::ServerResources;
use crate::security::cookies::credential_from_headers;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use tracing::{debug, info};

/// Work out the session state of a request without looking past the cookie
#[must_use]
pub fn session_state(resources: &ServerResources, request: &Request) -> SessionState {
    let accepted = credential_from_headers(request.headers(), resources.config.gate.cookie_name())
        .is_some_and(|credential| resources.verifier.verify(&credential));
    SessionState::from_accepted(accepted)
}

/// Gate every request: forward it, or answer `307` with the gate's target
pub async fn gate_middleware(
    State(resources): State<Arc<ServerResources>>,
    request: Request,
    next: Next,
) -> Response {
    let session = session_state(&resources, &request);
    let path = request.uri().path();

    match evaluate(path, session, &resources.config.gate) {
        GateDecision::PassThrough => {
            debug!(
                path,
                authenticated = session.is_authenticated(),
                "Gate passed request through"
            );
            next.run(request).await
        }
        GateDecision::RedirectTo(target) => {
            info!(
                path,
                redirect_to = target,
                authenticated = session.is_authenticated(),
                verifier = resources.verifier.name(),
                "Gate redirected request"
            );
            Redirect::temporary(target).into_response()
        }
    }
}
