// ABOUTME: Main library entry point for the Folio portfolio site backend
// ABOUTME: Cookie-gated admin dashboard plus public contact and newsletter capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

#![deny(unsafe_code)]

//! # Folio Server
//!
//! Backend for a personal portfolio site. Public pages are served elsewhere;
//! this crate owns the pieces with behaviour:
//!
//! - **Route access gate**: every request is classified against a protected
//!   prefix and either passes through or is redirected, based on whether it
//!   carries an accepted admin credential cookie
//! - **Admin sessions**: login and logout endpoints that issue and revoke the
//!   credential, with a pluggable verification strategy
//! - **Capture**: contact form and newsletter endpoints backed by a
//!   pluggable submission store
//! - **Dashboard**: JSON views over captured submissions, behind the gate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use folio_server::config::ServerConfig;
//! use folio_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::in_memory(config));
//!     folio_server::server::run(resources).await
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Unified error types
pub mod errors;

/// Route access gate decision logic
pub mod gate;

/// Logging configuration and structured event helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared resources handed to handlers
pub mod resources;

/// HTTP routes and router assembly
pub mod routes;

/// Cookie helpers and security headers
pub mod security;

/// Server lifecycle
pub mod server;

/// Admin session credentials, verification, and registry
pub mod session;

/// Submission storage
pub mod store;

pub use folio_core::constants;
pub use folio_core::models;
