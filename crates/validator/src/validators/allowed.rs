//! Allow-list membership validator

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates that a value is a string appearing in a caller-supplied
/// allow-list.
///
/// The allow-list is the universe for the membership check and is passed
/// at construction, per call site; nothing is stored globally.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::one_of;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = one_of(["a", "b", "c"]);
/// assert!(v.validate(&json!("a")).is_ok());
/// assert!(v.validate(&json!("d")).is_err());
/// assert!(v.validate(&json!(1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<String>,
}

impl OneOf {
    /// Creates a validator from an allow-list of permitted tokens.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allow-list.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl Validate for OneOf {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if self.allowed.iter().any(|token| token == text) {
            Ok(())
        } else {
            Err(
                ValidationError::new("not_allowed", "Value is not in the allow-list")
                    .with_param("value", text.to_string()),
            )
        }
    }
}

/// Creates a [`OneOf`] validator from an allow-list.
pub fn one_of<I, S>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(allowed)
}
