//! Event store port.
//!
//! Defines the contract for persisting and retrieving Event aggregates.
//! The store is built once by the application root and handed to every
//! component that needs it; there is no global instance.
//!
//! # Design
//!
//! - **Whole-record writes**: `replace` overwrites the full event
//! - **Durable**: implementations persist on every `replace`
//! - **Read-your-writes**: `find` after `replace` returns the new record

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Repository port for Event aggregate persistence.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Insert or overwrite the event stored under `id`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn replace(&self, id: &EventId, event: &Event) -> Result<(), DomainError>;

    /// All stored events, ordered by creation time.
    async fn list(&self) -> Result<Vec<Event>, DomainError>;

    /// Remove an event. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn remove(&self, id: &EventId) -> Result<bool, DomainError>;
}
