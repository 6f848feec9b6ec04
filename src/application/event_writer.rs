//! Serialized access to the event store for writers.
//!
//! Every mutation is a load / mutate / replace cycle. Writers sharing one
//! `EventWriter` hold its lock for the whole cycle, so cycles never
//! interleave and effects land in lock acquisition order.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::event::{Event, EventError};
use crate::domain::foundation::EventId;
use crate::ports::EventStore;

/// Shared handle for mutating events in an [`EventStore`].
#[derive(Clone)]
pub struct EventWriter {
    store: Arc<dyn EventStore>,
    lock: Arc<Mutex<()>>,
}

impl EventWriter {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load an event, or fail with `NotFound`.
    pub async fn load(&self, id: &EventId) -> Result<Event, EventError> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| EventError::not_found(*id))
    }

    /// Apply `mutate` to the stored event and persist it if it reports a change.
    ///
    /// `mutate` returns its result together with a changed flag. Unchanged
    /// events are not written back.
    pub async fn modify<T, F>(&self, id: &EventId, mutate: F) -> Result<T, EventError>
    where
        F: FnOnce(&mut Event) -> (T, bool) + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;

        let mut event = self.load(id).await?;
        let (result, changed) = mutate(&mut event);
        if changed {
            self.store.replace(id, &event).await?;
        }
        Ok(result)
    }

    /// Store a new event.
    pub async fn insert(&self, event: &Event) -> Result<(), EventError> {
        let _guard = self.lock.lock().await;
        self.store.replace(event.id(), event).await?;
        Ok(())
    }

    /// Remove an event and return it as it was at removal, or fail with
    /// `NotFound`.
    pub async fn remove(&self, id: &EventId) -> Result<Event, EventError> {
        let _guard = self.lock.lock().await;

        let event = self.load(id).await?;
        if self.store.remove(id).await? {
            Ok(event)
        } else {
            Err(EventError::not_found(*id))
        }
    }
}
