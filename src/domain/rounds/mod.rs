//! Round progression for tournament divisions.
//!
//! - `sequence` - the fixed order of rounds shared by every event
//! - `progression` - per-division active round state and transitions

mod progression;
mod sequence;

pub use progression::{ActiveRounds, DivisionRoundState, RoundTransition};
pub use sequence::{RoundSequence, FINAL_ROUND, NUMBERED_ROUNDS};
