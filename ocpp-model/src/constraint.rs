//! Leaf predicates shared by setters and `validate()`
//!
//! Every predicate here is pure so that an aggregate `validate()` can re-check
//! current state without going through the setter that committed it.

use std::fmt;

use crate::error::{ConstraintViolation, Result, Violation};
use crate::messages::Validate;

/// Length as JSON Schema counts it (Unicode scalar values, not bytes)
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn within_length(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

pub fn optional_within_length(s: Option<&str>, max: usize) -> bool {
    s.map_or(true, |s| within_length(s, max))
}

/// Absent, or present and internally valid
pub fn optional_valid<T: Validate>(value: Option<&T>) -> bool {
    value.map_or(true, |v| v.validate())
}

/// Commit `value` if `predicate` holds, otherwise report `violation` on `field`
pub fn check<T: fmt::Debug>(
    field: &'static str,
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    violation: impl FnOnce(&T) -> Violation,
) -> Result<T> {
    if predicate(&value) {
        Ok(value)
    } else {
        let violation = violation(&value);
        Err(ConstraintViolation::new(field, &value, violation))
    }
}

/// Bounded string field
pub fn check_length(field: &'static str, value: String, max: usize) -> Result<String> {
    check(
        field,
        value,
        |s| within_length(s, max),
        |s| Violation::TooLong {
            max,
            len: char_len(s),
        },
    )
}

pub fn check_optional_length(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>> {
    value.map(|s| check_length(field, s, max)).transpose()
}

/// Optional composite field
pub fn check_composite<T: Validate + fmt::Debug>(
    field: &'static str,
    value: Option<T>,
) -> Result<Option<T>> {
    check(
        field,
        value,
        |v| optional_valid(v.as_ref()),
        |_| Violation::InvalidComposite,
    )
}

/// Required field handed over by a deserializer
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ConstraintViolation::missing(field))
}

/// Protocol `integer` (32-bit signed) from a wider JSON number
pub fn check_integer(field: &'static str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        ConstraintViolation::new(
            field,
            &value,
            Violation::OutOfRange {
                min: i32::MIN.into(),
                max: i32::MAX.into(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars() {
        // 4 chars, 8 bytes
        assert!(within_length("žžžž", 4));
        assert!(!within_length("žžžžž", 4));
        assert!(optional_within_length(None, 0));
    }

    #[test]
    fn test_check_length_reports_len() {
        let err = check_length("vendorId", "abcdef".to_string(), 5).unwrap_err();
        assert_eq!(err.field, "vendorId");
        assert_eq!(err.violation, Violation::TooLong { max: 5, len: 6 });

        let ok = check_length("vendorId", "abcde".to_string(), 5).unwrap();
        assert_eq!(ok, "abcde");
    }

    #[test]
    fn test_required() {
        assert_eq!(required("x", Some(1)).unwrap(), 1);
        let err = required::<i32>("x", None).unwrap_err();
        assert_eq!(err.violation, Violation::Missing);
    }

    #[test]
    fn test_check_integer_range() {
        assert_eq!(check_integer("id", 42).unwrap(), 42);
        let err = check_integer("id", i64::from(i32::MAX) + 1).unwrap_err();
        assert!(matches!(err.violation, Violation::OutOfRange { .. }));
    }
}
