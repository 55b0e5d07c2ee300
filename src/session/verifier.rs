// ABOUTME: Credential verification strategies consulted before the gate decides
// ABOUTME: Presence-only check by default, or membership in the issued-session registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::{SessionCredential, SessionRegistry};
use crate::config::CredentialCheck;
use std::sync::Arc;

/// Decides whether a presented credential counts as an authenticated session.
///
/// Implementations must be cheap and free of I/O: they run on every request
/// that reaches the protected area.
pub trait CredentialVerifier: Send + Sync {
    /// Accept or reject `credential`
    fn verify(&self, credential: &SessionCredential) -> bool;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Accepts any non-empty credential.
///
/// This is a presence check, not authentication: a forged cookie with any
/// value passes. It matches the behaviour the site has always had and is
/// only suitable for a low-stakes admin page. Use [`IssuedSessionVerifier`]
/// to require a credential handed out by the login endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceVerifier;

impl CredentialVerifier for PresenceVerifier {
    fn verify(&self, _credential: &SessionCredential) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "presence"
    }
}

/// Accepts only live credentials issued by the shared [`SessionRegistry`]
#[derive(Debug, Clone)]
pub struct IssuedSessionVerifier {
    registry: Arc<SessionRegistry>,
}

impl IssuedSessionVerifier {
    /// Verify against `registry`
    #[must_use]
    pub const fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

impl CredentialVerifier for IssuedSessionVerifier {
    fn verify(&self, credential: &SessionCredential) -> bool {
        self.registry.contains_live(credential)
    }

    fn name(&self) -> &'static str {
        "issued"
    }
}

/// Build the verifier selected by configuration
#[must_use]
pub fn verifier_for(
    check: CredentialCheck,
    registry: &Arc<SessionRegistry>,
) -> Arc<dyn CredentialVerifier> {
    match check {
        CredentialCheck::Presence => Arc::new(PresenceVerifier),
        CredentialCheck::Issued => Arc::new(IssuedSessionVerifier::new(Arc::clone(registry))),
    }
}
