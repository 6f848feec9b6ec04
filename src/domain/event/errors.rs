//! Event-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, ValidationError};

/// Event-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Event was not found in the store.
    NotFound(EventId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The tournament API could not be reached or answered with an error.
    RemoteUnavailable(String),
    /// Persistence failed.
    Storage(String),
}

impl EventError {
    pub fn not_found(id: EventId) -> Self {
        EventError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EventError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn remote(message: impl Into<String>) -> Self {
        EventError::RemoteUnavailable(message.into())
    }
    pub fn storage(message: impl Into<String>) -> Self {
        EventError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            EventError::NotFound(_) => ErrorCode::EventNotFound,
            EventError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EventError::RemoteUnavailable(_) => ErrorCode::RemoteUnavailable,
            EventError::Storage(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            EventError::NotFound(id) => format!("Event not found: {}", id),
            EventError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            EventError::RemoteUnavailable(msg) => format!("Tournament API unavailable: {}", msg),
            EventError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EventError {}

impl From<DomainError> for EventError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => EventError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::RemoteUnavailable => EventError::RemoteUnavailable(err.message),
            _ => EventError::Storage(err.to_string()),
        }
    }
}

impl From<ValidationError> for EventError {
    fn from(err: ValidationError) -> Self {
        EventError::validation(err.field().to_string(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_event_not_found_code() {
        let err = EventError::not_found(EventId::new());
        assert_eq!(err.code(), ErrorCode::EventNotFound);
        assert!(err.to_string().starts_with("Event not found"));
    }

    #[test]
    fn domain_validation_error_keeps_field() {
        let err: EventError = DomainError::validation("name", "Event name cannot be empty").into();
        assert_eq!(
            err,
            EventError::ValidationFailed {
                field: "name".to_string(),
                message: "Event name cannot be empty".to_string(),
            }
        );
    }

    #[test]
    fn database_error_becomes_storage() {
        let err: EventError = DomainError::new(ErrorCode::DatabaseError, "disk full").into();
        assert!(matches!(err, EventError::Storage(ref m) if m.contains("disk full")));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
