//! In-Memory Event Store Adapter
//!
//! Keeps events in a map guarded by an async lock.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::EventStore;

/// In-memory storage for events
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
}

impl InMemoryEventStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `events`
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let map = events.into_iter().map(|e| (*e.id(), e)).collect();
        Self {
            events: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of stored events
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Returns true if no events are stored
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn find(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn replace(&self, id: &EventId, event: &Event) -> Result<(), DomainError> {
        self.events.write().await.insert(*id, event.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let mut events: Vec<Event> = self.events.read().await.values().cloned().collect();
        events.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(events)
    }

    async fn remove(&self, id: &EventId) -> Result<bool, DomainError> {
        Ok(self.events.write().await.remove(id).is_some())
    }
}
