//! The fixed order in which a division's rounds are contested.

use once_cell::sync::Lazy;

/// Number of numbered rounds before the finals.
pub const NUMBERED_ROUNDS: usize = 9;

/// Name of the last round of every division.
pub const FINAL_ROUND: &str = "Finales";

static STANDARD: Lazy<RoundSequence> = Lazy::new(|| {
    let rounds = (1..=NUMBERED_ROUNDS)
        .map(|n| format!("Ronda {}", n))
        .chain(std::iter::once(FINAL_ROUND.to_string()))
        .collect();
    RoundSequence { rounds }
});

/// Ordered, immutable list of round names.
///
/// The process-wide sequence is shared by every event and division; there is
/// no per-event customisation of round count or naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSequence {
    rounds: Vec<String>,
}

impl RoundSequence {
    /// The standard sequence: `Ronda 1` through `Ronda 9`, then `Finales`.
    pub fn standard() -> &'static RoundSequence {
        &STANDARD
    }

    /// Round names in contest order.
    pub fn rounds(&self) -> &[String] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.rounds.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.rounds.last().map(String::as_str)
    }

    /// Index of `round` in the sequence, if it is a member.
    pub fn position(&self, round: &str) -> Option<usize> {
        self.rounds.iter().position(|r| r == round)
    }

    pub fn contains(&self, round: &str) -> bool {
        self.position(round).is_some()
    }

    /// Returns true if `round` is the last element.
    pub fn is_final(&self, round: &str) -> bool {
        self.last() == Some(round)
    }

    /// The round immediately following `round`.
    ///
    /// `None` when `round` is the last element or not a member.
    pub fn next(&self, round: &str) -> Option<&str> {
        let index = self.position(round)?;
        self.rounds.get(index + 1).map(String::as_str)
    }
}
