//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Writers share an [`EventWriter`] so their store updates never interleave.

mod event_writer;
pub mod handlers;
mod round_controller;

pub use event_writer::EventWriter;
pub use handlers::{
    CreateEventCommand, CreateEventHandler, CreateEventResult, DeleteEventCommand,
    DeleteEventHandler, DeleteEventResult, SyncCategoriesCommand, SyncCategoriesHandler,
    SyncCategoriesResult,
};
pub use round_controller::DivisionRoundController;
