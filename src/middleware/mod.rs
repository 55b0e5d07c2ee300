// ABOUTME: HTTP middleware for request identification, CORS, and the admin route gate
// ABOUTME: Layers applied around the router by routes::build_router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

/// CORS configuration
pub mod cors;
/// Admin route gate
pub mod gate;
/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use gate::gate_middleware;
pub use request_id::{request_id_middleware, RequestId};
