// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration split by concern: network, gate, session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Configuration module for the Folio server
//!
//! All settings come from environment variables and are read once at
//! startup:
//!
//! - **Environment**: Deployment mode and the assembled [`ServerConfig`]
//! - **Gate**: Protected prefix, login path, cookie name, redirect targets
//! - **Network**: Bind address, CORS, timeouts, body limits
//! - **Security**: Credential check strategy and admin login secret

use folio_core::errors::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Environment and server configuration
pub mod environment;
/// Admin route gate configuration
pub mod gate;
/// Network configuration
pub mod network;
/// Session and login security configuration
pub mod security;

pub use environment::{Environment, ServerConfig};
pub use gate::{GateConfig, GateConfigError};
pub use network::{CorsConfig, NetworkConfig};
pub use security::{CredentialCheck, SessionConfig};

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
pub(crate) fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}
