//! Event domain module.
//!
//! A tournament event with its cached categories and the active round of
//! each division, plus reconciliation against the tournament API.

mod aggregate;
mod errors;
mod reconcile;

pub use aggregate::{Event, MAX_NAME_LENGTH};
pub use errors::EventError;
pub use reconcile::merge;
