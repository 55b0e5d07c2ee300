// ABOUTME: Security response headers applied to every response of the site backend
// ABOUTME: Environment-aware policy rendered as tower-http SetResponseHeaderLayer stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::config::Environment;
use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Header policy for JSON responses and redirects
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SecurityHeaders {
    /// Headers sent in every environment
    #[must_use]
    pub fn development() -> Self {
        Self {
            headers: vec![
                (
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ),
                (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
                (
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ),
                (
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
                ),
            ],
        }
    }

    /// Development headers plus HSTS
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::development();
        config.headers.push((
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ));
        config
    }

    /// Pick the policy for a deployment environment
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Header pairs in the order they are applied
    #[must_use]
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// Wrap `router` so every response carries these headers unless a handler
    /// already set them
    #[must_use]
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.headers.iter().fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name.clone(),
                value.clone(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(config: &SecurityHeaders) -> Vec<&str> {
        config.headers().iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn test_development_headers() {
        let config = SecurityHeaders::for_environment(Environment::Development);
        let names = names(&config);
        assert!(names.contains(&"x-content-type-options"));
        assert!(names.contains(&"x-frame-options"));
        assert!(names.contains(&"referrer-policy"));
        assert!(!names.contains(&"strict-transport-security"));
    }

    #[test]
    fn test_production_adds_hsts() {
        let config = SecurityHeaders::for_environment(Environment::Production);
        assert!(names(&config).contains(&"strict-transport-security"));
    }
}
