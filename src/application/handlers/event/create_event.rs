//! CreateEventHandler - Command handler for creating tournament events.

use chrono::NaiveDate;

use crate::application::EventWriter;
use crate::domain::event::{Event, EventError};
use crate::domain::foundation::EventId;

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// Result of successful event creation.
#[derive(Debug, Clone)]
pub struct CreateEventResult {
    pub event: Event,
}

/// Handler for creating events.
pub struct CreateEventHandler {
    writer: EventWriter,
}

impl CreateEventHandler {
    pub fn new(writer: EventWriter) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<CreateEventResult, EventError> {
        // 1. Build and validate the aggregate
        let mut event = Event::new(EventId::new(), cmd.name.trim())?;
        if let Some(date) = cmd.date {
            event = event.with_date(date);
        }
        if let Some(location) = cmd.location.filter(|l| !l.trim().is_empty()) {
            event = event.with_location(location.trim());
        }

        // 2. Persist
        self.writer.insert(&event).await?;

        tracing::info!(event_id = %event.id(), name = event.name(), "Event created");
        Ok(CreateEventResult { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEventStore;
    use crate::ports::EventStore;
    use std::sync::Arc;

    fn command(name: &str) -> CreateEventCommand {
        CreateEventCommand {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 21),
            location: Some("  Polideportivo Norte ".to_string()),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_event() {
        let store = Arc::new(InMemoryEventStore::new());
        let handler = CreateEventHandler::new(EventWriter::new(store.clone()));

        let result = handler.handle(command(" Copa Verano ")).await.unwrap();

        assert_eq!(result.event.name(), "Copa Verano");
        assert_eq!(result.event.location(), Some("Polideportivo Norte"));
        assert!(result.event.active_rounds().is_empty());
        let stored = store.find(result.event.id()).await.unwrap();
        assert_eq!(stored, Some(result.event));
    }

    #[tokio::test]
    async fn blank_location_is_dropped() {
        let store = Arc::new(InMemoryEventStore::new());
        let handler = CreateEventHandler::new(EventWriter::new(store));
        let mut cmd = command("Copa");
        cmd.location = Some("   ".to_string());

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.event.location(), None);
    }

    #[tokio::test]
    async fn fails_with_empty_name() {
        let store = Arc::new(InMemoryEventStore::new());
        let handler = CreateEventHandler::new(EventWriter::new(store.clone()));

        let result = handler.handle(command("")).await;

        assert!(matches!(result, Err(EventError::ValidationFailed { ref field, .. }) if field == "name"));
        assert!(store.is_empty().await);
    }
}
