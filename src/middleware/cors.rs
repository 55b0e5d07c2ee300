// ABOUTME: CORS middleware configuration for the public capture endpoints
// ABOUTME: Builds a tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::config::network::{parse_origins, CorsConfig};
use axum::http::{header, HeaderName, HeaderValue, Method};
use folio_core::constants::network::REQUEST_ID_HEADER;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the site backend
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. An empty value or `*` allows any
/// origin, which is what local development wants; production deployments
/// should list the site's own origins:
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://folio.example,https://www.folio.example"
/// ```
///
/// Credentials are never allowed cross-origin: the admin cookie is
/// `SameSite=Strict` and only the site's own pages use it.
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = parse_origins(&config.allowed_origins)
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
