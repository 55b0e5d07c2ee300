// ABOUTME: Newsletter subscriber model
// ABOUTME: Subscription payload and the stored subscriber record keyed by normalized email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::{normalize_email, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newsletter signup payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubscriber {
    /// Address to subscribe
    pub email: String,
}

/// Stored subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Record identifier
    pub id: Uuid,
    /// Normalized email, unique across subscribers
    pub email: String,
    /// When the subscription was recorded
    pub subscribed_at: DateTime<Utc>,
}

impl NewSubscriber {
    /// Validate the payload and build the record to store
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the email is not plausible.
    pub fn validate(self) -> Result<Subscriber, ValidationError> {
        Ok(Subscriber {
            id: Uuid::new_v4(),
            email: normalize_email(&self.email)?,
            subscribed_at: Utc::now(),
        })
    }
}
