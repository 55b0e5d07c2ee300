// ABOUTME: Admin session credential model, verification strategies, and issued-session registry
// ABOUTME: Treats the cookie value as an opaque, unverified token until a verifier accepts it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! # Admin Sessions
//!
//! A [`SessionCredential`] is whatever opaque string the browser sent in the
//! admin cookie. Nothing about it is trusted on its own: a
//! [`CredentialVerifier`] decides whether it counts as an authenticated
//! session, and the gate only ever sees that verdict.

mod credential;
mod registry;
mod verifier;

pub use credential::SessionCredential;
pub use registry::SessionRegistry;
pub use verifier::{verifier_for, CredentialVerifier, IssuedSessionVerifier, PresenceVerifier};
