// ABOUTME: In-process registry of admin credentials issued by the login endpoint
// ABOUTME: Tracks expiry per credential and supports revocation on logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::SessionCredential;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Credentials issued by this process, keyed by token.
///
/// An entry with no expiry instant outlives any representable deadline.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<String, Option<Instant>>,
    ttl: Duration,
}

impl SessionRegistry {
    /// Create a registry whose sessions live for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Session lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generate and record a new credential
    #[must_use]
    pub fn issue(&self) -> SessionCredential {
        let credential = SessionCredential::generate();
        let expires_at = Instant::now().checked_add(self.ttl);
        self.sessions
            .insert(credential.expose().to_owned(), expires_at);
        debug!(active_sessions = self.sessions.len(), "Issued admin session");
        credential
    }

    /// True if `credential` was issued here, is unexpired, and was not revoked
    #[must_use]
    pub fn contains_live(&self, credential: &SessionCredential) -> bool {
        self.sessions
            .get(credential.expose())
            .is_some_and(|entry| {
                entry
                    .value()
                    .is_none_or(|expires_at| Instant::now() < expires_at)
            })
    }

    /// Forget `credential`; returns whether it was known
    pub fn revoke(&self, credential: &SessionCredential) -> bool {
        self.sessions.remove(credential.expose()).is_some()
    }

    /// Drop every expired entry and return how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, expires_at| expires_at.is_none_or(|deadline| now < deadline));
        before.saturating_sub(self.sessions.len())
    }

    /// Number of tracked sessions, expired or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no session is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_revoke() {
        let registry = SessionRegistry::new(Duration::from_secs(60));
        let credential = registry.issue();
        assert!(registry.contains_live(&credential));
        assert_eq!(registry.len(), 1);

        assert!(registry.revoke(&credential));
        assert!(!registry.contains_live(&credential));
        assert!(!registry.revoke(&credential));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_credential_is_not_live() {
        let registry = SessionRegistry::new(Duration::from_secs(60));
        let _issued = registry.issue();
        let forged = SessionCredential::from_cookie_value("forged").unwrap();
        assert!(!registry.contains_live(&forged));
    }

    #[test]
    fn test_zero_ttl_sessions_expire_immediately() {
        let registry = SessionRegistry::new(Duration::ZERO);
        let credential = registry.issue();
        assert!(!registry.contains_live(&credential));
        assert_eq!(registry.purge_expired(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let registry = SessionRegistry::new(Duration::MAX);
        let credential = registry.issue();
        assert!(registry.contains_live(&credential));
        assert_eq!(registry.purge_expired(), 0);
    }
}
