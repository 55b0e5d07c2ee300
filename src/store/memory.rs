// ABOUTME: In-memory submission store backed by concurrent hash maps
// ABOUTME: Enforces one subscription per normalised email address
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

use super::SubmissionStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use folio_core::errors::{AppError, AppResult};
use folio_core::models::{ContactSubmission, StoreStats, Subscriber};
use std::cmp::Reverse;
use uuid::Uuid;

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: DashMap<Uuid, ContactSubmission>,
    // keyed by normalised email
    subscribers: DashMap<String, Subscriber>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SubmissionStore for InMemoryStore {
    async fn insert_contact(&self, contact: ContactSubmission) -> AppResult<Uuid> {
        let id = contact.id;
        self.contacts.insert(id, contact);
        Ok(id)
    }

    async fn list_contacts(&self) -> AppResult<Vec<ContactSubmission>> {
        let mut contacts: Vec<ContactSubmission> = self
            .contacts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        contacts.sort_by_key(|contact| Reverse(contact.created_at));
        Ok(contacts)
    }

    async fn delete_contact(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.contacts.remove(&id).is_some())
    }

    async fn insert_subscriber(&self, subscriber: Subscriber) -> AppResult<Uuid> {
        match self.subscribers.entry(subscriber.email.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists("Subscriber")
                .with_details(serde_json::json!({ "field": "email" }))),
            Entry::Vacant(slot) => {
                let id = subscriber.id;
                slot.insert(subscriber);
                Ok(id)
            }
        }
    }

    async fn list_subscribers(&self) -> AppResult<Vec<Subscriber>> {
        let mut subscribers: Vec<Subscriber> = self
            .subscribers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        subscribers.sort_by_key(|subscriber| Reverse(subscriber.subscribed_at));
        Ok(subscribers)
    }

    async fn stats(&self) -> AppResult<StoreStats> {
        Ok(StoreStats {
            contact_count: self.contacts.len(),
            subscriber_count: self.subscribers.len(),
            latest_contact_at: self
                .contacts
                .iter()
                .map(|entry| entry.value().created_at)
                .max(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use folio_core::errors::ErrorCode;
    use folio_core::models::{NewContact, NewSubscriber};

    fn contact(name: &str) -> ContactSubmission {
        NewContact {
            name: name.to_owned(),
            email: "visitor@example.com".to_owned(),
            message: "Hello there".to_owned(),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_contacts_listed_newest_first() {
        let store = InMemoryStore::new();
        let mut older = contact("Older");
        older.created_at = Utc::now() - Duration::minutes(5);
        let newer = contact("Newer");
        let newest_at = newer.created_at;

        store.insert_contact(older).await.unwrap();
        store.insert_contact(newer).await.unwrap();

        let names: Vec<String> = store
            .list_contacts()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Newer", "Older"]);

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.contact_count, 2);
        assert_eq!(stats.latest_contact_at, Some(newest_at));
    }

    #[tokio::test]
    async fn test_delete_contact() {
        let store = InMemoryStore::new();
        let id = store.insert_contact(contact("Ada")).await.unwrap();
        assert!(store.delete_contact(id).await.unwrap());
        assert!(!store.delete_contact(id).await.unwrap());
        assert_eq!(store.stats().await.unwrap().contact_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_subscriber_rejected() {
        let store = InMemoryStore::new();
        let first = NewSubscriber {
            email: "Reader@Example.com".to_owned(),
        }
        .validate()
        .unwrap();
        let again = NewSubscriber {
            email: " reader@example.com ".to_owned(),
        }
        .validate()
        .unwrap();

        store.insert_subscriber(first).await.unwrap();
        let error = store.insert_subscriber(again).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
        assert_eq!(store.list_subscribers().await.unwrap().len(), 1);
    }
}
