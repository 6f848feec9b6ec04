//! Per-division round state and its transitions.
//!
//! Each division is either without an active round (scoring disabled) or has
//! exactly one active round. The map below is the only place that state
//! lives; a missing key means no active round.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RoundSequence;
use crate::domain::foundation::DivisionId;

/// State of a single division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionRoundState {
    NoActiveRound,
    ActiveRound(String),
}

impl DivisionRoundState {
    pub fn is_scoring_enabled(&self) -> bool {
        matches!(self, DivisionRoundState::ActiveRound(_))
    }
}

/// Outcome of applying a round operation to a division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoundTransition {
    /// The division's active round was set to `round`.
    Activated {
        round: String,
        previous: Option<String>,
    },
    /// The division's entry was removed.
    Deactivated { previous: Option<String> },
    /// `from` was completed and `to` is now active.
    Advanced {
        from: String,
        to: String,
        previous: Option<String>,
    },
    /// The completed round is the last one; nothing follows.
    AlreadyFinal {
        round: String,
        current: Option<String>,
    },
    /// The completed round is not part of the sequence.
    UnknownRound {
        round: String,
        current: Option<String>,
    },
}

impl RoundTransition {
    /// Returns true if the division's state differs from before.
    pub fn changed(&self) -> bool {
        match self {
            RoundTransition::Activated { round, previous } => {
                previous.as_deref() != Some(round.as_str())
            }
            RoundTransition::Deactivated { previous } => previous.is_some(),
            RoundTransition::Advanced { to, previous, .. } => {
                previous.as_deref() != Some(to.as_str())
            }
            RoundTransition::AlreadyFinal { .. } | RoundTransition::UnknownRound { .. } => false,
        }
    }

    /// Returns true for the no-op outcomes of completing a round.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            RoundTransition::AlreadyFinal { .. } | RoundTransition::UnknownRound { .. }
        )
    }

    /// Returns true when an advance was computed from a round that was not the
    /// division's active round at the time.
    pub fn is_stale(&self) -> bool {
        match self {
            RoundTransition::Advanced { from, previous, .. } => {
                previous.as_deref() != Some(from.as_str())
            }
            _ => false,
        }
    }

    /// Active round of the division after the transition.
    pub fn active_round(&self) -> Option<&str> {
        match self {
            RoundTransition::Activated { round, .. } => Some(round),
            RoundTransition::Deactivated { .. } => None,
            RoundTransition::Advanced { to, .. } => Some(to),
            RoundTransition::AlreadyFinal { current, .. }
            | RoundTransition::UnknownRound { current, .. } => current.as_deref(),
        }
    }
}

/// Mapping from division to its currently active round name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveRounds(BTreeMap<DivisionId, String>);

impl ActiveRounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active round of `division`, if any.
    pub fn get(&self, division: &DivisionId) -> Option<&str> {
        self.0.get(division).map(String::as_str)
    }

    pub fn state_of(&self, division: &DivisionId) -> DivisionRoundState {
        match self.get(division) {
            Some(round) => DivisionRoundState::ActiveRound(round.to_string()),
            None => DivisionRoundState::NoActiveRound,
        }
    }

    /// Absence of an entry means scoring is disabled for the division.
    pub fn is_scoring_enabled(&self, division: &DivisionId) -> bool {
        self.0.contains_key(division)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DivisionId, &str)> {
        self.0.iter().map(|(d, r)| (d, r.as_str()))
    }

    /// Sets the active round unconditionally.
    ///
    /// `round` is not checked against the sequence.
    pub fn activate(&mut self, division: &DivisionId, round: impl Into<String>) -> RoundTransition {
        let round = round.into();
        let previous = self.0.insert(division.clone(), round.clone());
        RoundTransition::Activated { round, previous }
    }

    /// Removes the division's entry. Absent entries are not an error.
    pub fn deactivate(&mut self, division: &DivisionId) -> RoundTransition {
        let previous = self.0.remove(division);
        RoundTransition::Deactivated { previous }
    }

    /// Activates the round following `completed` in `sequence`.
    ///
    /// The successor is computed from `completed`, not from the division's
    /// current round, so a stale argument moves the division backwards.
    pub fn complete_and_advance(
        &mut self,
        division: &DivisionId,
        completed: &str,
        sequence: &RoundSequence,
    ) -> RoundTransition {
        let current = self.get(division).map(str::to_string);

        if !sequence.contains(completed) {
            return RoundTransition::UnknownRound {
                round: completed.to_string(),
                current,
            };
        }

        match sequence.next(completed) {
            Some(next) => {
                let to = next.to_string();
                let previous = self.0.insert(division.clone(), to.clone());
                RoundTransition::Advanced {
                    from: completed.to_string(),
                    to,
                    previous,
                }
            }
            None => RoundTransition::AlreadyFinal {
                round: completed.to_string(),
                current,
            },
        }
    }

    /// Keeps only the divisions for which `keep` returns true.
    ///
    /// Returns the number of entries removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&DivisionId, &str) -> bool) -> usize {
        let before = self.0.len();
        self.0.retain(|d, r| keep(d, r));
        before - self.0.len()
    }
}
