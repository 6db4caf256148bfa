//! Non-empty string validator

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates that a value is a string of length >= 1.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::not_empty_text;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = not_empty_text();
/// assert!(v.validate(&json!("not empty string")).is_ok());
/// assert!(v.validate(&json!("")).is_err());
/// assert!(v.validate(&json!(123)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotEmptyText;

impl Validate for NotEmptyText {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if text.is_empty() {
            Err(ValidationError::new(
                "empty_string",
                "String must not be empty",
            ))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotEmptyText`] validator.
#[must_use]
pub const fn not_empty_text() -> NotEmptyText {
    NotEmptyText
}
