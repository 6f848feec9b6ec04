//! Adapters - Implementations of ports.
//!
//! - `storage` - EventStore implementations (file, in-memory)
//! - `remote` - Tournament API client

pub mod remote;
pub mod storage;

pub use remote::{HttpCategorySummarySource, TournamentApiConfig};
pub use storage::{FileEventStore, InMemoryEventStore, StoreError};
