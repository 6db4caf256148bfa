//! Numeric identifier validator

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates that a value is a number strictly greater than zero.
///
/// Integrality is deliberately not checked: a positive non-integer number
/// passes. Callers that need integral ids must enforce that themselves.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::positive_id;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = positive_id();
/// assert!(v.validate(&json!(123)).is_ok());
/// assert!(v.validate(&json!(0.5)).is_ok()); // non-integer accepted
/// assert!(v.validate(&json!(0)).is_err());
/// assert!(v.validate(&json!(-1)).is_err());
/// assert!(v.validate(&json!("123")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositiveId;

impl Validate for PositiveId {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Value::Number(number) = input else {
            return Err(ValidationError::type_mismatch("number", value_kind(input)));
        };

        match number.as_f64() {
            Some(n) if n > 0.0 => Ok(()),
            _ => Err(
                ValidationError::new("not_positive", "Id must be a number greater than zero")
                    .with_param("actual", number.to_string()),
            ),
        }
    }
}

/// Creates a [`PositiveId`] validator.
#[must_use]
pub const fn positive_id() -> PositiveId {
    PositiveId
}
