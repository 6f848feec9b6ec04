//! Application handlers.
//!
//! Command handlers that orchestrate domain operations on events.

pub mod event;

pub use event::{
    CreateEventCommand, CreateEventHandler, CreateEventResult, DeleteEventCommand,
    DeleteEventHandler, DeleteEventResult, SyncCategoriesCommand, SyncCategoriesHandler,
    SyncCategoriesResult,
};
