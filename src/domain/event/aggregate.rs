//! Event aggregate entity.
//!
//! An event is one tournament. It caches the category summaries published by
//! the tournament API and owns the active round of each of its divisions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::category::CategorySummary;
use crate::domain::foundation::{DivisionId, DomainError, EventId, Timestamp};
use crate::domain::rounds::{ActiveRounds, RoundSequence, RoundTransition};

/// Maximum length for event name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Event aggregate - a tournament with its categories and live rounds.
///
/// # Invariants
///
/// - `name` is 1-200 characters, non-empty
/// - each division has at most one active round
/// - `updated_at` only moves when the record actually changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default)]
    categories: Vec<CategorySummary>,
    #[serde(default)]
    active_rounds: ActiveRounds,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Event {
    /// Create a new event with no categories and no active rounds.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty or too long
    pub fn new(id: EventId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            date: None,
            location: None,
            categories: Vec::new(),
            active_rounds: ActiveRounds::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn active_rounds(&self) -> &ActiveRounds {
        &self.active_rounds
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Total athletes enrolled across all categories.
    pub fn athlete_count(&self) -> u32 {
        self.categories.iter().map(|c| c.athlete_count).sum()
    }

    /// Every division derived from the cached categories.
    pub fn divisions(&self) -> impl Iterator<Item = DivisionId> + '_ {
        self.categories.iter().flat_map(CategorySummary::divisions)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Round progression
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the division's active round to `round`.
    pub fn activate_round(&mut self, division: &DivisionId, round: impl Into<String>) -> RoundTransition {
        let transition = self.active_rounds.activate(division, round);
        self.touch_if(transition.changed());
        transition
    }

    /// Remove the division's active round, disabling scoring.
    pub fn deactivate_round(&mut self, division: &DivisionId) -> RoundTransition {
        let transition = self.active_rounds.deactivate(division);
        self.touch_if(transition.changed());
        transition
    }

    /// Activate the round following `completed` in `sequence`.
    pub fn complete_round_and_activate_next(
        &mut self,
        division: &DivisionId,
        completed: &str,
        sequence: &RoundSequence,
    ) -> RoundTransition {
        let transition = self
            .active_rounds
            .complete_and_advance(division, completed, sequence);
        self.touch_if(transition.changed());
        transition
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Crate-internal mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the cached categories, pruning rounds of divisions that no
    /// longer exist. Returns the number of pruned rounds.
    pub(crate) fn replace_categories(&mut self, categories: Vec<CategorySummary>) -> usize {
        self.categories = categories;
        let live: HashSet<DivisionId> = self.divisions().collect();
        // Opaque ids cannot be matched against categories, so they stay
        let pruned = self
            .active_rounds
            .retain(|division, _| live.contains(division) || division.parts().is_none());
        self.updated_at = Timestamp::now();
        pruned
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn touch_if(&mut self, changed: bool) {
        if changed {
            self.updated_at = Timestamp::now();
        }
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Event name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Event name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }
}
