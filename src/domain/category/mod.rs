//! Category summaries as published by the tournament API.
//!
//! A category groups athletes by belt, gender and age. Each modality a
//! category competes in forms one division.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, DivisionId, ModalityId};

/// Remote view of a category and its enrolment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u8>,
    #[serde(default)]
    pub modalities: Vec<ModalityId>,
    #[serde(default)]
    pub athlete_count: u32,
}

impl CategorySummary {
    /// Creates a summary with no modalities and no athletes.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            belt: None,
            gender: None,
            min_age: None,
            max_age: None,
            modalities: Vec::new(),
            athlete_count: 0,
        }
    }

    pub fn with_modality(mut self, modality: ModalityId) -> Self {
        self.modalities.push(modality);
        self
    }

    pub fn with_athlete_count(mut self, count: u32) -> Self {
        self.athlete_count = count;
        self
    }

    /// Division ids for every modality of this category.
    pub fn divisions(&self) -> impl Iterator<Item = DivisionId> + '_ {
        self.modalities
            .iter()
            .map(move |modality| DivisionId::from_parts(&self.id, modality))
    }
}
