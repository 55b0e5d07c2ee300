// ABOUTME: Session security configuration for the admin credential cookie and login
// ABOUTME: Chooses the credential check strategy and holds the admin password secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::{env_var_or, parse_env_or};
use folio_core::constants::{env_keys, session};
use folio_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// How the gate decides that a presented credential is acceptable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialCheck {
    /// Any non-empty cookie value is accepted
    #[default]
    Presence,
    /// Only credentials issued by this process and still live are accepted
    Issued,
}

impl CredentialCheck {
    /// Parse the `ADMIN_CREDENTIAL_CHECK` value
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `presence` or `issued`
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "presence" => Ok(Self::Presence),
            "issued" => Ok(Self::Issued),
            other => Err(AppError::config_invalid(format!(
                "Invalid {} value '{other}': expected 'presence' or 'issued'",
                env_keys::CREDENTIAL_CHECK
            ))),
        }
    }
}

impl fmt::Display for CredentialCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presence => write!(f, "presence"),
            Self::Issued => write!(f, "issued"),
        }
    }
}

/// Admin session settings
#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Credential check strategy used by the gate
    pub credential_check: CredentialCheck,
    /// Password accepted by the login endpoint; login is disabled when unset
    pub admin_password: Option<String>,
    /// Cookie `Max-Age` and registry TTL in seconds
    pub cookie_max_age_secs: u64,
    /// Add the `Secure` attribute to the credential cookie
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credential_check: CredentialCheck::default(),
            admin_password: None,
            cookie_max_age_secs: session::DEFAULT_MAX_AGE_SECS,
            cookie_secure: false,
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("credential_check", &self.credential_check)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cookie_max_age_secs", &self.cookie_max_age_secs)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl SessionConfig {
    /// Load session configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if session environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        let admin_password = env::var(env_keys::ADMIN_PASSWORD)
            .ok()
            .filter(|password| !password.is_empty());

        Ok(Self {
            credential_check: CredentialCheck::parse(&env_var_or(
                env_keys::CREDENTIAL_CHECK,
                "presence",
            ))?,
            admin_password,
            cookie_max_age_secs: parse_env_or(
                env_keys::SESSION_COOKIE_MAX_AGE_SECS,
                session::DEFAULT_MAX_AGE_SECS,
            )?,
            cookie_secure: parse_env_or(env_keys::SESSION_COOKIE_SECURE, false)?,
        })
    }

    /// Whether the login endpoint can accept credentials
    #[must_use]
    pub const fn login_enabled(&self) -> bool {
        self.admin_password.is_some()
    }
}
