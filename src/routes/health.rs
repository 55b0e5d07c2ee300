// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Public endpoint reporting liveness and the running version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use axum::{routing::get, Json, Router};
use folio_core::constants::endpoints;
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route(endpoints::HEALTH_CHECK, get(Self::handle_health))
    }

    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        })
    }
}
