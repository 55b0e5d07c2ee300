// ABOUTME: Integration tests for the public health endpoint
// ABOUTME: Checks that health stays reachable without a credential
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{body_json, get, test_app, test_config};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_is_public() {
    let (app, _) = test_app(test_config());
    let response = app.oneshot(get("/health", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
