//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `rounds` - Round sequence and per-division round progression
//! - `category` - Category summaries published by the tournament API
//! - `event` - Event aggregate and category reconciliation

pub mod category;
pub mod event;
pub mod foundation;
pub mod rounds;
