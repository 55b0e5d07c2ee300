// ABOUTME: Submission storage abstraction for contact messages and newsletter subscribers
// ABOUTME: Pluggable backend trait with an in-memory implementation for development and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

/// In-memory submission store
pub mod memory;

use folio_core::errors::AppResult;
use folio_core::models::{ContactSubmission, StoreStats, Subscriber};
use uuid::Uuid;

pub use memory::InMemoryStore;

/// Storage backend for captured submissions.
///
/// Records arrive already validated. Listing methods return the newest
/// record first.
#[async_trait::async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a contact message
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    async fn insert_contact(&self, contact: ContactSubmission) -> AppResult<Uuid>;

    /// All contact messages, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    async fn list_contacts(&self) -> AppResult<Vec<ContactSubmission>>;

    /// Delete a contact message; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    async fn delete_contact(&self, id: Uuid) -> AppResult<bool>;

    /// Persist a subscriber
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the email is already subscribed
    async fn insert_subscriber(&self, subscriber: Subscriber) -> AppResult<Uuid>;

    /// All subscribers, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    async fn list_subscribers(&self) -> AppResult<Vec<Subscriber>>;

    /// Counts for the dashboard summary
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    async fn stats(&self) -> AppResult<StoreStats>;
}
