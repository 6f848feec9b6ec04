//! Category summary source port.
//!
//! The tournament API is the source of truth for categories and enrolment.
//! This port fetches the current summaries for one event.

use async_trait::async_trait;

use crate::domain::category::CategorySummary;
use crate::domain::foundation::{DomainError, EventId};

/// Port for reading category summaries from the tournament API.
#[async_trait]
pub trait CategorySummarySource: Send + Sync {
    /// Fetch the category summaries of an event.
    ///
    /// # Errors
    ///
    /// - `RemoteUnavailable` when the API cannot be reached or rejects the call
    async fn fetch(&self, event_id: &EventId) -> Result<Vec<CategorySummary>, DomainError>;
}
