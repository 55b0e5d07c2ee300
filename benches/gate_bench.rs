// ABOUTME: Criterion benchmarks for the route access gate
// ABOUTME: Measures classification and cookie parsing on the per-request hot path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Criterion benchmarks for the route access gate.
//!
//! The gate runs on every request, so its cost is measured in isolation and
//! together with cookie extraction from a realistic `Cookie` header.

#![allow(clippy::unwrap_used, missing_docs)]

use axum::http::{header, HeaderMap, HeaderValue};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_server::config::GateConfig;
use folio_server::gate::{evaluate, SessionState};
use folio_server::security::cookies::credential_from_headers;
use folio_server::session::{CredentialVerifier, PresenceVerifier};

const PATHS: [&str; 4] = [
    "/",
    "/blog/writing-a-gate-in-rust",
    "/dashboard/login",
    "/dashboard/contacts/8d3c",
];

fn bench_evaluate(c: &mut Criterion) {
    let config = GateConfig::default();
    let mut group = c.benchmark_group("gate_evaluate");

    for (label, session) in [
        ("anonymous", SessionState::Anonymous),
        ("authenticated", SessionState::Authenticated),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                for path in PATHS {
                    black_box(evaluate(black_box(path), session, &config));
                }
            });
        });
    }
    group.finish();
}

fn bench_cookie_to_decision(c: &mut Criterion) {
    let config = GateConfig::default();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; _ga=GA1.1.123.456; admin-token=4f2a9c; lang=en"),
    );
    let verifier = PresenceVerifier;

    c.bench_function("gate_cookie_to_decision", |b| {
        b.iter(|| {
            let accepted = credential_from_headers(black_box(&headers), config.cookie_name())
                .is_some_and(|credential| verifier.verify(&credential));
            black_box(evaluate(
                "/dashboard/contacts",
                SessionState::from_accepted(accepted),
                &config,
            ))
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_cookie_to_decision);
criterion_main!(benches);
