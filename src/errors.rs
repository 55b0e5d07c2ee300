// ABOUTME: Unified error handling re-exported from the folio-core crate
// ABOUTME: Handlers return AppResult and rely on the IntoResponse impl for the JSON envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! # Unified Error Handling
//!
//! Every fallible handler returns [`AppResult`]. Errors render as
//! `{ "error": { "code", "message", "request_id?", "details?" } }` with the
//! status taken from [`ErrorCode::http_status`].

use axum::http::StatusCode;

pub use folio_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};

/// Map an axum extractor rejection onto the error envelope.
///
/// Body-limit rejections keep their `413`; everything else is invalid input.
#[must_use]
pub fn rejection_error(status: StatusCode, body_text: String) -> AppError {
    let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorCode::PayloadTooLarge
    } else {
        ErrorCode::InvalidInput
    };
    AppError::new(code, body_text)
}
