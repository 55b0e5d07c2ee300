// ABOUTME: Core types and constants for the Folio portfolio site backend
// ABOUTME: Foundation crate with error handling, submission models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

#![deny(unsafe_code)]

//! # Folio Core
//!
//! Foundation crate shared by the Folio server and its tooling. It changes
//! rarely, which keeps incremental builds of the server crate fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Defaults, endpoint paths, environment keys, limits
//! - **models**: Contact and subscriber records with validation

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Contact and newsletter submission models
pub mod models;
