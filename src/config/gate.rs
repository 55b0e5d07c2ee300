// ABOUTME: Route gate configuration: protected prefix, login path, cookie name, redirect targets
// ABOUTME: Validated once at startup so a misconfigured gate can never loop or misclassify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::env_var_or;
use folio_core::constants::{endpoints, env_keys, gate};
use folio_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;

/// Misconfigurations detected by [`GateConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateConfigError {
    /// Protected prefix is empty or relative
    #[error("protected prefix '{0}' must be a non-empty absolute path")]
    InvalidPrefix(String),
    /// Login path is relative
    #[error("login path '{0}' must be an absolute path")]
    RelativeLoginPath(String),
    /// Login path is not covered by the protected prefix
    #[error("login path '{login_path}' is not inside protected prefix '{prefix}'")]
    LoginOutsidePrefix {
        /// Configured login path
        login_path: String,
        /// Configured prefix
        prefix: String,
    },
    /// A redirect target is relative
    #[error("redirect target '{0}' must be an absolute path")]
    RelativeRedirect(String),
    /// A redirect target cannot be sent as a `Location` header
    #[error("redirect target '{0}' must be visible ASCII to be usable as a Location header")]
    InvalidRedirect(String),
    /// The protected prefix would cover or collide with a public endpoint
    #[error("protected prefix '{prefix}' covers public endpoint '{endpoint}'")]
    PrefixShadowsPublicRoute {
        /// Configured prefix
        prefix: String,
        /// Public endpoint under the prefix
        endpoint: &'static str,
    },
    /// Authenticated visitors of the login path would be sent back to it
    #[error("authenticated redirect '{0}' is the login path and would loop")]
    AuthenticatedRedirectLoops(String),
    /// Anonymous visitors would be sent to another path that demands a credential
    #[error("unauthenticated redirect '{0}' is protected and is not the login path")]
    UnauthenticatedRedirectLoops(String),
    /// Cookie name is empty or contains characters not allowed in a cookie name
    #[error("cookie name '{0}' is not a valid cookie token")]
    InvalidCookieName(String),
}

impl From<GateConfigError> for AppError {
    fn from(error: GateConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Settings for the admin route gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    protected_prefix: String,
    login_path: String,
    cookie_name: String,
    unauthenticated_redirect: String,
    authenticated_redirect: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(
            gate::DEFAULT_PROTECTED_PREFIX,
            gate::DEFAULT_LOGIN_PATH,
            gate::DEFAULT_COOKIE_NAME,
        )
    }
}

impl GateConfig {
    /// Create a gate for `protected_prefix` with `login_path` as the entry point.
    ///
    /// Anonymous requests are redirected to the login path and authenticated
    /// visitors of the login path to the prefix itself.
    pub fn new(
        protected_prefix: impl Into<String>,
        login_path: impl Into<String>,
        cookie_name: impl Into<String>,
    ) -> Self {
        let protected_prefix = protected_prefix.into();
        let login_path = login_path.into();
        Self {
            unauthenticated_redirect: login_path.clone(),
            authenticated_redirect: protected_prefix.clone(),
            protected_prefix,
            login_path,
            cookie_name: cookie_name.into(),
        }
    }

    /// Override where anonymous requests for protected paths are sent
    #[must_use]
    pub fn with_unauthenticated_redirect(mut self, target: impl Into<String>) -> Self {
        self.unauthenticated_redirect = target.into();
        self
    }

    /// Override where authenticated requests for the login path are sent
    #[must_use]
    pub fn with_authenticated_redirect(mut self, target: impl Into<String>) -> Self {
        self.authenticated_redirect = target.into();
        self
    }

    /// Load the gate configuration from environment variables and validate it
    ///
    /// # Errors
    ///
    /// Returns [`GateConfigError`] if the resulting configuration is invalid
    pub fn from_env() -> Result<Self, GateConfigError> {
        let protected_prefix =
            env_var_or(env_keys::PROTECTED_PREFIX, gate::DEFAULT_PROTECTED_PREFIX);
        let login_path = env_var_or(env_keys::LOGIN_PATH, gate::DEFAULT_LOGIN_PATH);
        let cookie_name = env_var_or(env_keys::COOKIE_NAME, gate::DEFAULT_COOKIE_NAME);
        let unauthenticated_redirect =
            env::var(env_keys::UNAUTHENTICATED_REDIRECT).unwrap_or_else(|_| login_path.clone());
        let authenticated_redirect = env::var(env_keys::AUTHENTICATED_REDIRECT)
            .unwrap_or_else(|_| protected_prefix.clone());

        let config = Self::new(protected_prefix, login_path, cookie_name)
            .with_unauthenticated_redirect(unauthenticated_redirect)
            .with_authenticated_redirect(authenticated_redirect);
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for states that would misclassify or loop
    ///
    /// # Errors
    ///
    /// Returns the first [`GateConfigError`] found
    pub fn validate(&self) -> Result<(), GateConfigError> {
        if !self.protected_prefix.starts_with('/') {
            return Err(GateConfigError::InvalidPrefix(self.protected_prefix.clone()));
        }
        if !self.login_path.starts_with('/') {
            return Err(GateConfigError::RelativeLoginPath(self.login_path.clone()));
        }
        if !self.login_path.starts_with(&self.protected_prefix) {
            return Err(GateConfigError::LoginOutsidePrefix {
                login_path: self.login_path.clone(),
                prefix: self.protected_prefix.clone(),
            });
        }
        if let Some(endpoint) = PUBLIC_ENDPOINTS
            .into_iter()
            .find(|endpoint| endpoint.starts_with(self.protected_prefix.as_str()))
        {
            return Err(GateConfigError::PrefixShadowsPublicRoute {
                prefix: self.protected_prefix.clone(),
                endpoint,
            });
        }
        for target in [&self.unauthenticated_redirect, &self.authenticated_redirect] {
            if !target.starts_with('/') {
                return Err(GateConfigError::RelativeRedirect(target.clone()));
            }
            if !target.bytes().all(|byte| byte.is_ascii_graphic()) {
                return Err(GateConfigError::InvalidRedirect(target.clone()));
            }
        }
        if self.authenticated_redirect == self.login_path {
            return Err(GateConfigError::AuthenticatedRedirectLoops(
                self.authenticated_redirect.clone(),
            ));
        }
        if self.unauthenticated_redirect.starts_with(&self.protected_prefix)
            && self.unauthenticated_redirect != self.login_path
        {
            return Err(GateConfigError::UnauthenticatedRedirectLoops(
                self.unauthenticated_redirect.clone(),
            ));
        }
        if self.cookie_name.is_empty() || !self.cookie_name.bytes().all(is_cookie_token_byte) {
            return Err(GateConfigError::InvalidCookieName(self.cookie_name.clone()));
        }
        Ok(())
    }

    /// Prefix that marks the protected area
    #[must_use]
    pub fn protected_prefix(&self) -> &str {
        &self.protected_prefix
    }

    /// The entry point exempt from the credential requirement
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Cookie the gate inspects
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Target for anonymous requests to protected paths
    #[must_use]
    pub fn unauthenticated_redirect(&self) -> &str {
        &self.unauthenticated_redirect
    }

    /// Target for authenticated requests to the login path
    #[must_use]
    pub fn authenticated_redirect(&self) -> &str {
        &self.authenticated_redirect
    }
}

/// Routes mounted outside the gate; the protected prefix must not reach them
const PUBLIC_ENDPOINTS: [&str; 5] = [
    endpoints::HEALTH_CHECK,
    endpoints::ADMIN_LOGIN,
    endpoints::ADMIN_LOGOUT,
    endpoints::CONTACT,
    endpoints::SUBSCRIBE,
];

/// RFC 6265 `token` characters: visible ASCII minus separators
const fn is_cookie_token_byte(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7e)
        && !matches!(
            byte,
            b'(' | b')'
                | b'<'
                | b'>'
                | b'@'
                | b','
                | b';'
                | b':'
                | b'\\'
                | b'"'
                | b'/'
                | b'['
                | b']'
                | b'?'
                | b'='
                | b'{'
                | b'}'
        )
}
