// ABOUTME: Admin dashboard endpoints mounted under the protected prefix
// ABOUTME: Summary, submission listings, contact deletion, and the login descriptor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Dashboard routes
//!
//! Paths are derived from the gate configuration, so moving the protected
//! prefix moves the dashboard with it. None of these handlers check the
//! credential: the gate middleware has already run by the time they are
//! reached.

use crate::config::GateConfig;
use crate::errors::rejection_error;
use crate::resources::ServerResources;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, MethodRouter};
use axum::{Json, Router};
use folio_core::constants::endpoints;
use folio_core::errors::{AppError, AppResult};
use folio_core::models::{ContactSubmission, StoreStats, Subscriber};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// What the login page needs to render its form
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginDescriptor {
    /// Endpoint accepting the admin password
    pub login_endpoint: String,
    /// Cookie the login endpoint sets
    pub cookie_name: String,
}

/// Dashboard routes implementation
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the dashboard routes for the configured protected area
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let gate = &resources.config.gate;
        let login_path = gate.login_path().to_owned();
        let pages: [(String, MethodRouter<Arc<ServerResources>>); 4] = [
            (
                gate.protected_prefix().to_owned(),
                get(Self::handle_summary),
            ),
            (sub_path(gate, "contacts"), get(Self::handle_list_contacts)),
            (
                sub_path(gate, "contacts/:id"),
                delete(Self::handle_delete_contact),
            ),
            (
                sub_path(gate, "subscribers"),
                get(Self::handle_list_subscribers),
            ),
        ];

        // the login page wins if a configured login path shadows a dashboard page
        pages
            .into_iter()
            .filter(|(path, _)| *path != login_path)
            .fold(
                Router::new().route(&login_path, get(Self::handle_login_page)),
                |router, (path, handler)| router.route(&path, handler),
            )
            .with_state(resources)
    }

    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<StoreStats>> {
        Ok(Json(resources.store.stats().await?))
    }

    async fn handle_login_page(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<LoginDescriptor> {
        Json(LoginDescriptor {
            login_endpoint: endpoints::ADMIN_LOGIN.to_owned(),
            cookie_name: resources.config.gate.cookie_name().to_owned(),
        })
    }

    async fn handle_list_contacts(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<ContactSubmission>>> {
        Ok(Json(resources.store.list_contacts().await?))
    }

    async fn handle_list_subscribers(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<Subscriber>>> {
        Ok(Json(resources.store.list_subscribers().await?))
    }

    async fn handle_delete_contact(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<Uuid>, PathRejection>,
    ) -> AppResult<StatusCode> {
        let Path(id) = id.map_err(|e| rejection_error(e.status(), e.body_text()))?;
        if resources.store.delete_contact(id).await? {
            info!(contact_id = %id, "Deleted contact message");
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(AppError::not_found("Contact").with_resource_id(id.to_string()))
        }
    }
}

/// `<prefix>/<segment>` without doubling a trailing slash on the prefix
fn sub_path(gate: &GateConfig, segment: &str) -> String {
    format!("{}/{segment}", gate.protected_prefix().trim_end_matches('/'))
}
