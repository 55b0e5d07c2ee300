// ABOUTME: Security utilities for the admin credential cookie and HTTP response headers
// ABOUTME: Groups cookie parsing and building with the security header policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! # Security
//!
//! Cookie helpers used by the gate and the login endpoints, plus the set of
//! hardening headers attached to every response.

/// Credential cookie parsing and `Set-Cookie` construction
pub mod cookies;
/// Security response headers
pub mod headers;

pub use headers::SecurityHeaders;
