//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Separator between the category and modality parts of a division id.
pub const DIVISION_ID_SEPARATOR: char = ':';

/// Unique identifier for a tournament event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random EventId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an EventId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of a category as assigned by the tournament API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new CategoryId, returning error if empty or containing the
    /// division separator.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("category_id"));
        }
        if id.contains(DIVISION_ID_SEPARATOR) {
            return Err(ValidationError::invalid_format(
                "category_id",
                format!("must not contain '{}'", DIVISION_ID_SEPARATOR),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

/// Identifier of a modality (kata, kumite, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModalityId(String);

impl ModalityId {
    /// Creates a new ModalityId, returning error if empty or containing the
    /// division separator.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("modality_id"));
        }
        if id.contains(DIVISION_ID_SEPARATOR) {
            return Err(ValidationError::invalid_format(
                "modality_id",
                format!("must not contain '{}'", DIVISION_ID_SEPARATOR),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModalityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModalityId> for String {
    fn from(id: ModalityId) -> Self {
        id.0
    }
}

/// Identifier of a division: one (category, modality) scoring group.
///
/// Treated as opaque by round progression. Ids built with
/// [`DivisionId::from_parts`] can be split back with [`DivisionId::parts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DivisionId(String);

impl DivisionId {
    /// Creates a DivisionId from a raw value, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("division_id"));
        }
        Ok(Self(id))
    }

    /// Derives the division id for a category competing in a modality.
    pub fn from_parts(category: &CategoryId, modality: &ModalityId) -> Self {
        Self(format!(
            "{}{}{}",
            category.as_str(),
            DIVISION_ID_SEPARATOR,
            modality.as_str()
        ))
    }

    /// Splits a derived id back into its category and modality parts.
    ///
    /// Returns `None` for ids that were not built from parts.
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.0
            .split_once(DIVISION_ID_SEPARATOR)
            .filter(|(category, modality)| !category.is_empty() && !modality.is_empty())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DivisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DivisionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DivisionId> for String {
    fn from(id: DivisionId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_generates_unique_values() {
        let id1 = EventId::new();
        let id2 = EventId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn event_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: EventId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn event_id_rejects_invalid_string() {
        let result: Result<EventId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn event_id_serializes_as_plain_uuid() {
        let id = EventId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn category_id_rejects_empty() {
        assert!(CategoryId::new("").is_err());
        assert!(CategoryId::new("   ").is_err());
    }

    #[test]
    fn modality_id_rejects_empty() {
        assert!(ModalityId::new("").is_err());
    }

    #[test]
    fn division_id_rejects_empty() {
        let result = DivisionId::new("");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn division_id_from_parts_joins_category_and_modality() {
        let category = CategoryId::new("cadete-m-verde").unwrap();
        let modality = ModalityId::new("kata").unwrap();
        let division = DivisionId::from_parts(&category, &modality);
        assert_eq!(division.as_str(), "cadete-m-verde:kata");
        assert_eq!(division.parts(), Some(("cadete-m-verde", "kata")));
    }

    #[test]
    fn division_id_without_separator_has_no_parts() {
        let division = DivisionId::new("opaque-division").unwrap();
        assert_eq!(division.parts(), None);
    }

    #[test]
    fn category_and_modality_ids_reject_separator() {
        let category = CategoryId::new("infantil:verde");
        let modality = ModalityId::new("kata:equipos");

        assert!(matches!(category, Err(ValidationError::InvalidFormat { ref field, .. }) if field == "category_id"));
        assert!(matches!(modality, Err(ValidationError::InvalidFormat { ref field, .. }) if field == "modality_id"));
    }

    #[test]
    fn deserializing_empty_ids_is_rejected() {
        assert!(serde_json::from_str::<CategoryId>("\"\"").is_err());
        assert!(serde_json::from_str::<ModalityId>("\"  \"").is_err());
        assert!(serde_json::from_str::<DivisionId>("\"\"").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id: DivisionId = serde_json::from_str("\"cadete:kata\"").unwrap();
        assert_eq!(id.as_str(), "cadete:kata");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cadete:kata\"");
    }
}
