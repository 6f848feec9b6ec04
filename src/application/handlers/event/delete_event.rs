//! DeleteEventHandler - Command handler for deleting events.
//!
//! Deleting an event also ends every active round of its divisions, since
//! those only live inside the event record.

use crate::application::EventWriter;
use crate::domain::event::EventError;
use crate::domain::foundation::EventId;

/// Command to delete an event.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
}

/// Result of successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteEventResult {
    /// Number of divisions that had an active round when deleted.
    pub closed_rounds: usize,
}

/// Handler for deleting events.
pub struct DeleteEventHandler {
    writer: EventWriter,
}

impl DeleteEventHandler {
    pub fn new(writer: EventWriter) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<DeleteEventResult, EventError> {
        let removed = self.writer.remove(&cmd.event_id).await?;
        let closed_rounds = removed.active_rounds().len();

        tracing::info!(event_id = %cmd.event_id, closed_rounds, "Event deleted");
        Ok(DeleteEventResult { closed_rounds })
    }
}
