// ABOUTME: Data models for captured contact messages and newsletter subscribers
// ABOUTME: Includes input validation shared by the HTTP handlers and the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! Submission models.
//!
//! Records are owned by an external document store; these types describe the
//! shape the server writes and reads, not a database schema.

mod contact;
mod subscriber;

pub use contact::{ContactSubmission, NewContact};
pub use subscriber::{NewSubscriber, Subscriber};

use crate::constants::limits;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reasons a submission is rejected before it reaches the store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field was empty after trimming
    #[error("Field '{field}' must not be empty")]
    Empty {
        /// Offending field
        field: &'static str,
    },
    /// Field exceeded its character limit
    #[error("Field '{field}' must be at most {max} characters")]
    TooLong {
        /// Offending field
        field: &'static str,
        /// Character limit
        max: usize,
    },
    /// Email address is not plausible
    #[error("Field 'email' is not a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Name of the field that failed validation
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => *field,
            Self::InvalidEmail => "email",
        }
    }
}

/// Aggregate counts shown on the dashboard summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of stored contact messages
    pub contact_count: usize,
    /// Number of newsletter subscribers
    pub subscriber_count: usize,
    /// Creation time of the newest contact message
    pub latest_contact_at: Option<DateTime<Utc>>,
}

/// Trim `value` and enforce a non-empty, bounded length
pub(crate) fn bounded_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Normalize an email address to trimmed lowercase and check it is plausible
///
/// # Errors
///
/// Returns [`ValidationError`] when the address is empty, too long, or lacks
/// a local part and a dotted domain.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let email = bounded_text(raw, "email", limits::MAX_EMAIL_CHARS)?.to_lowercase();

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Ada@Example.COM ").unwrap(),
            "ada@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_implausible_addresses() {
        for raw in [
            "",
            "   ",
            "no-at-sign",
            "@example.com",
            "a@b",
            "a@.com",
            "a@b.",
            "a@@b.com",
            "a b@c.com",
        ] {
            assert!(normalize_email(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_bounded_text_limits() {
        assert_eq!(
            bounded_text("   ", "name", 5),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            bounded_text("abcdef", "name", 5),
            Err(ValidationError::TooLong { field: "name", max: 5 })
        );
        assert_eq!(bounded_text(" héllo ", "name", 5).unwrap(), "héllo");
    }
}
