//! Event command handlers.

mod create_event;
mod delete_event;
mod sync_categories;

pub use create_event::{CreateEventCommand, CreateEventHandler, CreateEventResult};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler, DeleteEventResult};
pub use sync_categories::{SyncCategoriesCommand, SyncCategoriesHandler, SyncCategoriesResult};
