// ABOUTME: Network configuration types for binding, CORS, timeouts, and body limits
// ABOUTME: Loaded from environment variables with local-development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::{env_var_or, parse_env_or};
use folio_core::constants::{env_keys, network};
use folio_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::env;

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins; empty or `*` allows any
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Load CORS configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allowed_origins: env::var(env_keys::CORS_ALLOWED_ORIGINS).unwrap_or_default(),
        }
    }

    /// True when any origin is allowed
    #[must_use]
    pub fn allows_any(&self) -> bool {
        let trimmed = self.allowed_origins.trim();
        trimmed.is_empty() || trimmed == "*"
    }
}

/// Listener and request-handling limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// CORS settings
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes
    pub max_request_body_bytes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            cors: CorsConfig::default(),
            request_timeout_secs: network::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_request_body_bytes: network::DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

impl NetworkConfig {
    /// Load network configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            host: env_var_or(env_keys::HOST, network::DEFAULT_HOST),
            http_port: parse_env_or(env_keys::HTTP_PORT, network::DEFAULT_HTTP_PORT)?,
            cors: CorsConfig::from_env(),
            request_timeout_secs: parse_env_or(
                env_keys::REQUEST_TIMEOUT_SECS,
                network::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            max_request_body_bytes: parse_env_or(
                env_keys::MAX_REQUEST_BODY_BYTES,
                network::DEFAULT_MAX_REQUEST_BODY_BYTES,
            )?,
        })
    }

    /// `host:port` string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

/// Parse comma-separated CORS origins
#[must_use]
pub fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".into()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
