// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Assembles network, gate, and session settings into one validated ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Environment-based configuration management for production deployment

use super::env_var_or;
use super::gate::GateConfig;
use super::network::NetworkConfig;
use super::security::SessionConfig;
use folio_core::constants::env_keys;
use folio_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Listener, CORS, and limits
    pub network: NetworkConfig,
    /// Admin route gate
    pub gate: GateConfig,
    /// Admin session and login settings
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load the full configuration from environment variables.
    ///
    /// The gate configuration is validated here, so a server that starts has
    /// a gate that cannot loop.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is malformed or the gate is misconfigured
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            network: NetworkConfig::from_env()?,
            gate: GateConfig::from_env()?,
            session: SessionConfig::from_env()?,
        };
        Ok(config)
    }

    /// Validate cross-cutting settings
    ///
    /// # Errors
    ///
    /// Returns an error if the gate configuration is invalid
    pub fn validate(&self) -> AppResult<()> {
        self.gate.validate()?;
        Ok(())
    }

    /// Settings that are acceptable locally but weak in production
    #[must_use]
    pub fn weak_settings(&self) -> Vec<&'static str> {
        let mut weak = Vec::new();
        if !self.environment.is_production() {
            return weak;
        }
        if !self.session.cookie_secure {
            weak.push("SESSION_COOKIE_SECURE is false in production; the admin cookie will be sent over plain HTTP");
        }
        if self.network.cors.allows_any() {
            weak.push("CORS_ALLOWED_ORIGINS allows any origin in production");
        }
        weak
    }

    /// Log every weak production setting; call once logging is initialized
    pub fn warn_on_weak_settings(&self) {
        for message in self.weak_settings() {
            warn!("{message}");
        }
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Folio Server Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - Protected Prefix: {}\n\
             - Login Path: {}\n\
             - Credential Cookie: {}\n\
             - Credential Check: {}\n\
             - Admin Login: {}\n\
             - Cookie Secure: {}\n\
             - CORS: {}",
            self.environment,
            self.network.bind_address(),
            self.gate.protected_prefix(),
            self.gate.login_path(),
            self.gate.cookie_name(),
            self.session.credential_check,
            if self.session.login_enabled() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.session.cookie_secure,
            if self.network.cors.allows_any() {
                "Any origin"
            } else {
                self.network.cors.allowed_origins.as_str()
            },
        )
    }
}
