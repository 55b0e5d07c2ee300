// ABOUTME: Contact form submission model
// ABOUTME: Raw request payload plus the validated record kept by the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::{bounded_text, normalize_email, ValidationError};
use crate::constants::limits;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact form payload as received from the site
#[derive(Debug, Clone, Deserialize)]
pub struct NewContact {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

/// Stored contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Record identifier
    pub id: Uuid,
    /// Sender name, trimmed
    pub name: String,
    /// Sender email, normalized
    pub email: String,
    /// Message body, trimmed
    pub message: String,
    /// When the message was received
    pub created_at: DateTime<Utc>,
}

impl NewContact {
    /// Validate the payload and turn it into a record ready for storage
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first field that fails.
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        let name = bounded_text(&self.name, "name", limits::MAX_NAME_CHARS)?;
        let email = normalize_email(&self.email)?;
        let message = bounded_text(&self.message, "message", limits::MAX_MESSAGE_CHARS)?;

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            created_at: Utc::now(),
        })
    }
}
