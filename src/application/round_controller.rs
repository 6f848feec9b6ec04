//! DivisionRoundController - decides which round accepts scores per division.
//!
//! Consumed by the scoring screens (which round is live for a division) and
//! by the division listings (progress per division). All writes go through
//! the shared [`EventWriter`], so they serialize with every other writer of
//! the same store.

use crate::application::EventWriter;
use crate::domain::event::EventError;
use crate::domain::foundation::{DivisionId, EventId};
use crate::domain::rounds::{ActiveRounds, DivisionRoundState, RoundSequence, RoundTransition};

/// Round progression operations for the divisions of an event.
#[derive(Clone)]
pub struct DivisionRoundController {
    writer: EventWriter,
    sequence: &'static RoundSequence,
}

impl DivisionRoundController {
    /// Creates a controller using the standard round sequence.
    pub fn new(writer: EventWriter) -> Self {
        Self {
            writer,
            sequence: RoundSequence::standard(),
        }
    }

    pub fn sequence(&self) -> &'static RoundSequence {
        self.sequence
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Make `round` the active round of the division.
    ///
    /// The name is not checked against the sequence.
    pub async fn activate_round(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
        round: &str,
    ) -> Result<RoundTransition, EventError> {
        let transition = self
            .writer
            .modify(event_id, |event| {
                let t = event.activate_round(division_id, round);
                let changed = t.changed();
                (t, changed)
            })
            .await?;

        if !self.sequence.contains(round) {
            tracing::debug!(
                event_id = %event_id,
                division_id = %division_id,
                round,
                "Activated a round outside the standard sequence"
            );
        }
        tracing::info!(
            event_id = %event_id,
            division_id = %division_id,
            round,
            changed = transition.changed(),
            "Round activated"
        );
        Ok(transition)
    }

    /// Remove the division's active round, disabling scoring for it.
    pub async fn deactivate_round(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
    ) -> Result<RoundTransition, EventError> {
        let transition = self
            .writer
            .modify(event_id, |event| {
                let t = event.deactivate_round(division_id);
                let changed = t.changed();
                (t, changed)
            })
            .await?;

        tracing::info!(
            event_id = %event_id,
            division_id = %division_id,
            changed = transition.changed(),
            "Round deactivated"
        );
        Ok(transition)
    }

    /// Complete `completed_round` and activate the one after it.
    ///
    /// Completing the final round or a name outside the sequence leaves the
    /// division untouched; the returned transition says which case applied.
    pub async fn complete_round_and_activate_next(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
        completed_round: &str,
    ) -> Result<RoundTransition, EventError> {
        let sequence = self.sequence;
        let transition = self
            .writer
            .modify(event_id, |event| {
                let t = event.complete_round_and_activate_next(division_id, completed_round, sequence);
                let changed = t.changed();
                (t, changed)
            })
            .await?;

        match &transition {
            RoundTransition::Advanced { from, to, previous } => {
                if transition.is_stale() {
                    tracing::warn!(
                        event_id = %event_id,
                        division_id = %division_id,
                        completed = %from,
                        active = ?previous,
                        next = %to,
                        "Completed round was not the active round"
                    );
                }
                tracing::info!(
                    event_id = %event_id,
                    division_id = %division_id,
                    from = %from,
                    to = %to,
                    "Round completed"
                );
            }
            RoundTransition::AlreadyFinal { round, .. } => {
                tracing::debug!(
                    event_id = %event_id,
                    division_id = %division_id,
                    round = %round,
                    "Final round completed, nothing to activate"
                );
            }
            RoundTransition::UnknownRound { round, .. } => {
                tracing::warn!(
                    event_id = %event_id,
                    division_id = %division_id,
                    round = %round,
                    "Completed round is not part of the round sequence; ignored"
                );
            }
            RoundTransition::Activated { .. } | RoundTransition::Deactivated { .. } => {}
        }
        Ok(transition)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The division -> round mapping of an event.
    pub async fn active_rounds(&self, event_id: &EventId) -> Result<ActiveRounds, EventError> {
        let event = self.writer.load(event_id).await?;
        Ok(event.active_rounds().clone())
    }

    /// The active round of a division, if any.
    pub async fn active_round(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
    ) -> Result<Option<String>, EventError> {
        let rounds = self.active_rounds(event_id).await?;
        Ok(rounds.get(division_id).map(str::to_string))
    }

    /// State of one division in the round state machine.
    pub async fn round_state(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
    ) -> Result<DivisionRoundState, EventError> {
        let rounds = self.active_rounds(event_id).await?;
        Ok(rounds.state_of(division_id))
    }

    /// Returns true if the division currently accepts scores.
    pub async fn is_scoring_enabled(
        &self,
        event_id: &EventId,
        division_id: &DivisionId,
    ) -> Result<bool, EventError> {
        Ok(self.round_state(event_id, division_id).await?.is_scoring_enabled())
    }
}
