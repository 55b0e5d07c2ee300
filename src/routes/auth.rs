// ABOUTME: Admin login and logout endpoints that issue and revoke the credential cookie
// ABOUTME: Password check uses constant-time comparison over SHA-256 digests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Admin session routes
//!
//! `POST /api/admin/login` exchanges the configured admin password for a
//! fresh credential cookie. `POST /api/admin/logout` revokes the presented
//! credential and expires the cookie. Both answer with the path the browser
//! should navigate to next.

use crate::errors::rejection_error;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::security::cookies::{
    clear_credential_cookie, credential_from_headers, set_credential_cookie,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use folio_core::constants::endpoints;
use folio_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Login request body
#[derive(Deserialize)]
pub struct LoginRequest {
    /// Admin password
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Where the client should navigate after a session change
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRedirect {
    /// Absolute path
    pub redirect_to: String,
}

/// Admin session routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the login and logout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ADMIN_LOGIN, post(Self::handle_login))
            .route(endpoints::ADMIN_LOGOUT, post(Self::handle_logout))
            .with_state(resources)
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Some(expected) = resources.config.session.admin_password.as_deref() else {
            return Err(AppError::unavailable("Admin login is not configured"));
        };
        let Json(request) = payload.map_err(|e| rejection_error(e.status(), e.body_text()))?;

        if !passwords_match(expected, &request.password) {
            AppLogger::log_security_event("admin_login_rejected", "medium", "wrong password");
            return Err(AppError::auth_invalid("Invalid admin password"));
        }

        let purged = resources.sessions.purge_expired();
        let credential = resources.sessions.issue();
        let session_config = &resources.config.session;
        let gate_config = &resources.config.gate;

        let mut headers = HeaderMap::new();
        set_credential_cookie(
            &mut headers,
            gate_config.cookie_name(),
            &credential,
            session_config.cookie_max_age_secs,
            session_config.cookie_secure,
        )?;
        debug!(
            purged_sessions = purged,
            active_sessions = resources.sessions.len(),
            "Session registry after login"
        );
        AppLogger::log_auth_event("login", true, None);

        Ok((
            headers,
            Json(SessionRedirect {
                redirect_to: gate_config.authenticated_redirect().to_owned(),
            }),
        )
            .into_response())
    }

    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        request_headers: HeaderMap,
    ) -> AppResult<Response> {
        let gate_config = &resources.config.gate;
        let revoked = credential_from_headers(&request_headers, gate_config.cookie_name())
            .is_some_and(|credential| resources.sessions.revoke(&credential));

        let mut headers = HeaderMap::new();
        clear_credential_cookie(
            &mut headers,
            gate_config.cookie_name(),
            resources.config.session.cookie_secure,
        )?;
        AppLogger::log_auth_event(
            "logout",
            true,
            Some(if revoked {
                "session revoked"
            } else {
                "no live session"
            }),
        );

        Ok((
            headers,
            Json(SessionRedirect {
                redirect_to: gate_config.login_path().to_owned(),
            }),
        )
            .into_response())
    }
}

/// Compare digests so timing does not depend on where or whether lengths differ
fn passwords_match(expected: &str, provided: &str) -> bool {
    let expected = Sha256::digest(expected.as_bytes());
    let provided = Sha256::digest(provided.as_bytes());
    expected.as_slice().ct_eq(provided.as_slice()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("hunter2", "hunter2"));
        assert!(!passwords_match("hunter2", "hunter3"));
        assert!(!passwords_match("hunter2", ""));
        assert!(!passwords_match("hunter2", "hunter22"));
    }

    #[test]
    fn test_login_request_debug_is_redacted() {
        let request = LoginRequest {
            password: "hunter2".to_owned(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }
}
