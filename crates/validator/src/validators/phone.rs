//! Simple phone number validator
//!
//! A deliberately shallow check: the value must be a string of at least
//! eight characters starting with `+`. No digit validation beyond that;
//! callers needing real number validation belong with a phone library.

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Minimum number of characters in a simple phone number.
const MIN_PHONE_CHARS: usize = 8;

/// Validates that a value is a string of at least 8 characters starting
/// with `+`.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::simple_phone;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = simple_phone();
/// assert!(v.validate(&json!("+12345678")).is_ok());
/// assert!(v.validate(&json!("12345678")).is_err()); // missing '+'
/// assert!(v.validate(&json!("+1234")).is_err()); // too short
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimplePhone;

impl Validate for SimplePhone {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if text.chars().count() < MIN_PHONE_CHARS {
            return Err(ValidationError::new(
                "phone_too_short",
                "Phone number must be at least 8 characters",
            )
            .with_param("min", MIN_PHONE_CHARS.to_string()));
        }

        if !text.starts_with('+') {
            return Err(ValidationError::new(
                "phone_missing_plus",
                "Phone number must start with '+'",
            ));
        }

        Ok(())
    }
}

/// Creates a [`SimplePhone`] validator.
#[must_use]
pub const fn simple_phone() -> SimplePhone {
    SimplePhone
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_phone_passes() {
        let v = simple_phone();
        assert!(v.validate(&json!("+12345678")).is_ok());
        assert!(v.validate(&json!("+41 22 345 67 89")).is_ok());
    }

    #[test]
    fn missing_plus_fails() {
        let err = simple_phone().validate(&json!("12345678")).unwrap_err();
        assert_eq!(err.code, "phone_missing_plus");
    }

    #[test]
    fn too_short_fails() {
        let v = simple_phone();
        assert_eq!(
            v.validate(&json!("12345")).unwrap_err().code,
            "phone_too_short"
        );
        assert_eq!(
            v.validate(&json!("+1234")).unwrap_err().code,
            "phone_too_short"
        );
        assert_eq!(v.validate(&json!("")).unwrap_err().code, "phone_too_short");
    }

    #[test]
    fn exactly_eight_chars_passes() {
        // The '+' counts toward the length, as the source always did.
        assert!(simple_phone().validate(&json!("+1234567")).is_ok());
    }

    #[test]
    fn non_string_shapes_fail() {
        let v = simple_phone();
        for input in [
            json!(null),
            json!(false),
            json!(true),
            json!(-1),
            json!(0),
            json!(123),
            json!({}),
            json!([1, 2, 3]),
        ] {
            let err = v.validate(&input).unwrap_err();
            assert_eq!(err.code, "type_mismatch");
        }
    }
}
