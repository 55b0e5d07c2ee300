// ABOUTME: Public capture endpoints for contact messages and newsletter signups
// ABOUTME: Validates payloads and hands records to the configured submission store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use crate::errors::rejection_error;
use crate::middleware::RequestId;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Extension, Json, Router};
use folio_core::constants::endpoints;
use folio_core::errors::{AppError, AppResult};
use folio_core::models::{NewContact, NewSubscriber, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Body returned when a submission is stored
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    /// Identifier of the stored record
    pub id: Uuid,
}

/// Contact and newsletter routes implementation
pub struct ContactRoutes;

impl ContactRoutes {
    /// Create the capture routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::CONTACT, post(Self::handle_contact))
            .route(endpoints::SUBSCRIBE, post(Self::handle_subscribe))
            .with_state(resources)
    }

    async fn handle_contact(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<NewContact>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
        let Json(contact) = payload.map_err(|e| rejected(&e, request_id.as_ref()))?;
        let contact = contact
            .validate()
            .map_err(|e| invalid(e, request_id.as_ref()))?;

        let id = resources.store.insert_contact(contact).await?;
        info!(contact_id = %id, "Stored contact message");
        Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
    }

    async fn handle_subscribe(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<NewSubscriber>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
        let Json(subscriber) = payload.map_err(|e| rejected(&e, request_id.as_ref()))?;
        let subscriber = subscriber
            .validate()
            .map_err(|e| invalid(e, request_id.as_ref()))?;

        let id = resources.store.insert_subscriber(subscriber).await?;
        info!(subscriber_id = %id, "Stored newsletter subscriber");
        Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
    }
}

fn tag(error: AppError, request_id: Option<&Extension<RequestId>>) -> AppError {
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}

fn rejected(rejection: &JsonRejection, request_id: Option<&Extension<RequestId>>) -> AppError {
    tag(
        rejection_error(rejection.status(), rejection.body_text()),
        request_id,
    )
}

fn invalid(error: ValidationError, request_id: Option<&Extension<RequestId>>) -> AppError {
    tag(AppError::from(error), request_id)
}
