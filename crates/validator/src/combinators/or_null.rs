//! OR-NULL combinator - accepts `null`, delegates everything else

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Accepts `Value::Null` outright; any other value is handed to the inner
/// validator.
///
/// Used to build the `*_or_null` element checks, where `null` marks an
/// intentionally absent entry in an otherwise-validated sequence.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::combinators::or_null;
/// use gatecheck_validator::validators::object_id;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = or_null(object_id());
/// assert!(v.validate(&json!(null)).is_ok());
/// assert!(v.validate(&json!("0123456789abcdefABCDEF00")).is_ok());
/// assert!(v.validate(&json!("invalid id")).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrNull<V> {
    inner: V,
}

impl<V> OrNull<V> {
    /// Creates a new OR-NULL combinator around an inner validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for OrNull<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_null() {
            Ok(())
        } else {
            self.inner.validate(input)
        }
    }
}

/// Creates an [`OrNull`] combinator around an inner validator.
pub fn or_null<V>(inner: V) -> OrNull<V> {
    OrNull::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::object_id;
    use serde_json::json;

    #[test]
    fn null_passes() {
        let v = or_null(object_id());
        assert!(v.validate(&json!(null)).is_ok());
    }

    #[test]
    fn valid_inner_value_passes() {
        let v = or_null(object_id());
        assert!(v.validate(&json!("0123456789abcdefABCDEF00")).is_ok());
    }

    #[test]
    fn invalid_inner_value_fails() {
        let v = or_null(object_id());
        assert!(v.validate(&json!("invalid id")).is_err());
        assert!(v.validate(&json!(123)).is_err());
    }
}
