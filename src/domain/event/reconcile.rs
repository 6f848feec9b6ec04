//! Reconciliation of remote category summaries into a cached event.

use super::Event;
use crate::domain::category::CategorySummary;

/// Merge the remote category list into a locally cached event.
///
/// The remote list is authoritative and its order is kept. When the local
/// categories are already equal to it the event is returned untouched and
/// `changed` is false, so callers can skip persistence.
pub fn merge(remote: &[CategorySummary], local: &Event) -> (Event, bool) {
    if local.categories() == remote {
        return (local.clone(), false);
    }

    let mut updated = local.clone();
    updated.replace_categories(remote.to_vec());
    (updated, true)
}
