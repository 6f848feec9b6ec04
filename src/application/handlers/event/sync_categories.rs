//! SyncCategoriesHandler - refresh an event's cached categories from the API.
//!
//! The remote fetch happens outside the writer lock; the merge runs against
//! whatever the store holds once the lock is taken, so round changes made
//! while the request was in flight are not lost.

use std::sync::Arc;

use crate::application::EventWriter;
use crate::domain::event::{merge, EventError};
use crate::domain::foundation::EventId;
use crate::ports::CategorySummarySource;

/// Command to sync one event's categories.
#[derive(Debug, Clone)]
pub struct SyncCategoriesCommand {
    pub event_id: EventId,
}

/// Result of a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCategoriesResult {
    /// Whether the cached event differed from the remote summaries.
    pub changed: bool,
    /// Number of categories now cached.
    pub category_count: usize,
    /// Number of active rounds dropped because their division disappeared.
    pub pruned_rounds: usize,
}

/// Handler for category synchronisation.
pub struct SyncCategoriesHandler {
    writer: EventWriter,
    source: Arc<dyn CategorySummarySource>,
}

impl SyncCategoriesHandler {
    pub fn new(writer: EventWriter, source: Arc<dyn CategorySummarySource>) -> Self {
        Self { writer, source }
    }

    pub async fn handle(&self, cmd: SyncCategoriesCommand) -> Result<SyncCategoriesResult, EventError> {
        // 1. Make sure the event exists before calling out
        self.writer.load(&cmd.event_id).await?;

        // 2. Fetch the authoritative summaries
        let remote = self.source.fetch(&cmd.event_id).await?;

        // 3. Merge into the latest local copy, persisting only on change
        let result = self
            .writer
            .modify(&cmd.event_id, |event| {
                let rounds_before = event.active_rounds().len();
                let (updated, changed) = merge(&remote, event);
                let pruned_rounds = rounds_before - updated.active_rounds().len();
                let category_count = updated.categories().len();
                *event = updated;
                (
                    SyncCategoriesResult {
                        changed,
                        category_count,
                        pruned_rounds,
                    },
                    changed,
                )
            })
            .await?;

        if result.pruned_rounds > 0 {
            tracing::warn!(
                event_id = %cmd.event_id,
                pruned_rounds = result.pruned_rounds,
                "Active rounds dropped for divisions no longer offered"
            );
        }
        tracing::info!(
            event_id = %cmd.event_id,
            changed = result.changed,
            categories = result.category_count,
            "Categories synced"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEventStore;
    use crate::domain::category::CategorySummary;
    use crate::domain::event::Event;
    use crate::domain::foundation::{
        CategoryId, DivisionId, DomainError, ErrorCode, ModalityId,
    };
    use crate::ports::EventStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockSource {
        summaries: Mutex<Vec<CategorySummary>>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn returning(summaries: Vec<CategorySummary>) -> Self {
            Self {
                summaries: Mutex::new(summaries),
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                summaries: Mutex::new(Vec::new()),
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CategorySummarySource for MockSource {
        async fn fetch(&self, _event_id: &EventId) -> Result<Vec<CategorySummary>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::new(ErrorCode::RemoteUnavailable, "Connection refused"));
            }
            Ok(self.summaries.lock().unwrap().clone())
        }
    }

    fn category(id: &str, athletes: u32) -> CategorySummary {
        CategorySummary::new(CategoryId::new(id).unwrap(), id)
            .with_modality(ModalityId::new("kata").unwrap())
            .with_athlete_count(athletes)
    }

    async fn seeded_store() -> (Arc<InMemoryEventStore>, EventId) {
        let store = Arc::new(InMemoryEventStore::new());
        let event = Event::new(EventId::new(), "Copa").unwrap();
        store.replace(event.id(), &event).await.unwrap();
        (store, *event.id())
    }

    #[tokio::test]
    async fn first_sync_caches_remote_categories() {
        let (store, id) = seeded_store().await;
        let source = Arc::new(MockSource::returning(vec![category("a", 3), category("b", 1)]));
        let handler = SyncCategoriesHandler::new(EventWriter::new(store.clone()), source);

        let result = handler.handle(SyncCategoriesCommand { event_id: id }).await.unwrap();

        assert!(result.changed);
        assert_eq!(result.category_count, 2);
        let stored = store.find(&id).await.unwrap().unwrap();
        assert_eq!(stored.athlete_count(), 4);
    }

    #[tokio::test]
    async fn second_sync_with_same_data_is_unchanged() {
        let (store, id) = seeded_store().await;
        let source = Arc::new(MockSource::returning(vec![category("a", 3)]));
        let handler = SyncCategoriesHandler::new(EventWriter::new(store.clone()), source);
        handler.handle(SyncCategoriesCommand { event_id: id }).await.unwrap();
        let after_first = store.find(&id).await.unwrap().unwrap();

        let result = handler.handle(SyncCategoriesCommand { event_id: id }).await.unwrap();

        assert!(!result.changed);
        let after_second = store.find(&id).await.unwrap().unwrap();
        assert_eq!(after_first.updated_at(), after_second.updated_at());
    }

    #[tokio::test]
    async fn removed_category_prunes_its_rounds() {
        let (store, id) = seeded_store().await;
        let source = Arc::new(MockSource::returning(vec![category("a", 3), category("b", 2)]));
        let writer = EventWriter::new(store.clone());
        let handler = SyncCategoriesHandler::new(writer.clone(), source.clone());
        handler.handle(SyncCategoriesCommand { event_id: id }).await.unwrap();

        let a = DivisionId::new("a:kata").unwrap();
        let b = DivisionId::new("b:kata").unwrap();
        writer
            .modify(&id, |e| {
                e.activate_round(&a, "Ronda 1");
                e.activate_round(&b, "Ronda 3");
                ((), true)
            })
            .await
            .unwrap();

        *source.summaries.lock().unwrap() = vec![category("a", 3)];
        let result = handler.handle(SyncCategoriesCommand { event_id: id }).await.unwrap();

        assert_eq!(result.pruned_rounds, 1);
        let stored = store.find(&id).await.unwrap().unwrap();
        assert_eq!(stored.active_rounds().get(&a), Some("Ronda 1"));
        assert_eq!(stored.active_rounds().get(&b), None);
    }

    #[tokio::test]
    async fn remote_failure_leaves_cache_untouched() {
        let (store, id) = seeded_store().await;
        let before = store.find(&id).await.unwrap();
        let handler =
            SyncCategoriesHandler::new(EventWriter::new(store.clone()), Arc::new(MockSource::failing()));

        let result = handler.handle(SyncCategoriesCommand { event_id: id }).await;

        assert!(matches!(result, Err(EventError::RemoteUnavailable(_))));
        assert_eq!(store.find(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn unknown_event_does_not_call_remote() {
        let store = Arc::new(InMemoryEventStore::new());
        let source = Arc::new(MockSource::returning(vec![]));
        let handler = SyncCategoriesHandler::new(EventWriter::new(store), source.clone());

        let result = handler
            .handle(SyncCategoriesCommand { event_id: EventId::new() })
            .await;

        assert!(matches!(result, Err(EventError::NotFound(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
