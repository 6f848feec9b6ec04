//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventStore` - Durable storage of event records
//! - `CategorySummarySource` - Category summaries from the tournament API

mod category_source;
mod event_store;

pub use category_source::CategorySummarySource;
pub use event_store::EventStore;
