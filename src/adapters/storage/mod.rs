//! Storage Adapters
//!
//! Implementations of the EventStore port.
//!
//! ## Available Adapters
//!
//! - **FileEventStore** - Stores each event as a YAML file on disk
//! - **InMemoryEventStore** - Stores events in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileEventStore, InMemoryEventStore};
//!
//! // Production: file-based storage
//! let store = FileEventStore::new("./data/events");
//!
//! // Testing: in-memory storage
//! let store = InMemoryEventStore::new();
//! ```

mod file_event_store;
mod in_memory_event_store;

pub use file_event_store::{FileEventStore, StoreError};
pub use in_memory_event_store::InMemoryEventStore;
