// ABOUTME: Shared server resources handed to every handler and middleware
// ABOUTME: Bundles configuration, submission store, session registry, and credential verifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::config::ServerConfig;
use crate::session::{verifier_for, CredentialVerifier, SessionRegistry};
use crate::store::{InMemoryStore, SubmissionStore};
use std::sync::Arc;
use std::time::Duration;

/// Everything request handling needs, shared behind an `Arc`
#[derive(Clone)]
pub struct ServerResources {
    /// Validated configuration
    pub config: Arc<ServerConfig>,
    /// Contact and subscriber storage
    pub store: Arc<dyn SubmissionStore>,
    /// Credentials issued by the login endpoint
    pub sessions: Arc<SessionRegistry>,
    /// Strategy the gate uses to accept a credential
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl ServerResources {
    /// Wire resources for `config` on top of `store`
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn SubmissionStore>) -> Self {
        let sessions = Arc::new(SessionRegistry::new(Duration::from_secs(
            config.session.cookie_max_age_secs,
        )));
        let verifier = verifier_for(config.session.credential_check, &sessions);
        Self {
            config: Arc::new(config),
            store,
            sessions,
            verifier,
        }
    }

    /// Resources backed by a fresh [`InMemoryStore`]
    #[must_use]
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(InMemoryStore::new()))
    }
}
