// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds the router over in-memory resources and shapes requests and responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `folio_server`

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use folio_server::config::{Environment, ServerConfig};
use folio_server::resources::ServerResources;
use folio_server::routes::build_router;
use folio_server::security::cookies::cookie_header;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Default configuration in testing mode
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Configuration with admin login enabled
pub fn login_config(password: &str) -> ServerConfig {
    let mut config = test_config();
    config.session.admin_password = Some(password.to_owned());
    config
}

/// Router plus the resources behind it
pub fn test_app(config: ServerConfig) -> (Router, Arc<ServerResources>) {
    init_test_logging();
    let resources = Arc::new(ServerResources::in_memory(config));
    (build_router(Arc::clone(&resources)), resources)
}

/// Request with an optional `Cookie` header
pub fn request(method: Method, uri: &str, cookies: &[(&str, &str)], body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookie_header(cookies));
    }
    builder.body(body).unwrap()
}

/// `GET` carrying `cookies`
pub fn get(uri: &str, cookies: &[(&str, &str)]) -> Request<Body> {
    request(Method::GET, uri, cookies, Body::empty())
}

/// `POST` of a JSON body carrying `cookies`
pub fn post_json(uri: &str, body: &serde_json::Value, cookies: &[(&str, &str)]) -> Request<Body> {
    let bytes = serde_json::to_vec(body).unwrap();
    let length = bytes.len();
    let mut request = request(Method::POST, uri, cookies, Body::from(bytes));
    let headers = request.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(header::CONTENT_LENGTH, header::HeaderValue::from(length));
    request
}

/// `Location` header of a response
pub fn location<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// First `Set-Cookie` header of a response
pub fn set_cookie<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Cookie value out of a `Set-Cookie` header
pub fn cookie_value(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map(|(_, value)| value.to_owned())
        .unwrap()
}

/// Parse a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
