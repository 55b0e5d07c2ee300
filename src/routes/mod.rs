// ABOUTME: Route module organization and router assembly for the Folio site backend
// ABOUTME: Merges domain routes and wraps them in the gate, tracing, and hardening layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Route module for the Folio server
//!
//! Each domain module owns its paths and thin handlers. [`build_router`]
//! merges them and applies the middleware stack, outermost first:
//!
//! 1. security response headers
//! 2. request ID
//! 3. `TraceLayer`
//! 4. CORS
//! 5. request timeout
//! 6. request body limit
//! 7. route gate
//!
//! The fallback is registered before the layers so unmatched paths are gated
//! like any other.

/// Admin login and logout
pub mod auth;
/// Contact and newsletter capture
pub mod contact;
/// Admin dashboard behind the gate
pub mod dashboard;
/// Health check
pub mod health;

pub use auth::AuthRoutes;
pub use contact::ContactRoutes;
pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;

use crate::middleware::{gate_middleware, request_id_middleware, setup_cors, RequestId};
use crate::resources::ServerResources;
use crate::security::SecurityHeaders;
use axum::http::Uri;
use axum::{middleware, Extension, Router};
use folio_core::errors::AppError;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    let router = Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(ContactRoutes::routes(Arc::clone(&resources)))
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .fallback(handle_not_found)
        .layer(middleware::from_fn_with_state(resources, gate_middleware))
        .layer(RequestBodyLimitLayer::new(
            config.network.max_request_body_bytes,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.network.request_timeout_secs,
        )))
        .layer(setup_cors(&config.network.cors))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware));

    SecurityHeaders::for_environment(config.environment).apply(router)
}

async fn handle_not_found(uri: Uri, request_id: Option<Extension<RequestId>>) -> AppError {
    let error = AppError::not_found(format!("Route {}", uri.path()));
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}
