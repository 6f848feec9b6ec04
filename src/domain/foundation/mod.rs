//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the tournament administration domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CategoryId, DivisionId, EventId, ModalityId, DIVISION_ID_SEPARATOR};
pub use timestamp::Timestamp;
