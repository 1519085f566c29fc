//! Error types for the message model
//!
//! `ConstraintViolation` is the only error a constructor or setter produces.
//! `PayloadError` belongs to the serializer boundary in [`crate::payload`].

use std::fmt;
use thiserror::Error;

/// Why a candidate value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Required field without a value
    Missing,
    /// String longer than the schema's `maxLength`
    TooLong { max: usize, len: usize },
    /// Number outside the representable or declared range
    OutOfRange { min: i64, max: i64 },
    /// Enum spelling not defined by the protocol
    UnknownVariant,
    /// Nested composite whose own `validate()` is false
    InvalidComposite,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => write!(f, "required value is missing"),
            Violation::TooLong { max, len } => {
                write!(f, "length {} exceeds maximum {}", len, max)
            }
            Violation::OutOfRange { min, max } => {
                write!(f, "value outside range {}..={}", min, max)
            }
            Violation::UnknownVariant => write!(f, "not a recognized enum value"),
            Violation::InvalidComposite => write!(f, "nested object is invalid"),
        }
    }
}

/// A field value failed its declared predicate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is invalid: {violation} (value: {value})")]
pub struct ConstraintViolation {
    /// Wire name of the offending field
    pub field: &'static str,
    /// Debug rendering of the rejected value
    pub value: String,
    pub violation: Violation,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, value: &impl fmt::Debug, violation: Violation) -> Self {
        Self {
            field,
            value: format!("{:?}", value),
            violation,
        }
    }

    /// Required field was absent
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            value: "null".to_string(),
            violation: Violation::Missing,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConstraintViolation>;

/// Errors at the boundary between message objects and JSON payloads
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Malformed JSON, wrong shape, or an unknown field
    #[error("payload rejected: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// Refused to encode a message that does not validate
    #[error("{kind} does not validate")]
    Invalid { kind: &'static str },

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message_names_field_and_value() {
        let err = ConstraintViolation::new(
            "checksum",
            &"abc",
            Violation::TooLong { max: 2, len: 3 },
        );
        let text = err.to_string();
        assert!(text.contains("checksum"));
        assert!(text.contains("\"abc\""));
        assert!(text.contains("exceeds maximum 2"));
    }

    #[test]
    fn test_missing() {
        let err = ConstraintViolation::missing("status");
        assert_eq!(err.violation, Violation::Missing);
        assert_eq!(err.value, "null");
    }
}
