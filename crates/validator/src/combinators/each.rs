//! EACH combinator - validates each element of a JSON array

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates every element of a JSON array with an inner validator.
///
/// The input must actually be an array; any other shape (including a
/// string, which is sequence-like but not a sequence) is rejected with a
/// `type_mismatch` error before any element is looked at. An empty array
/// passes vacuously.
///
/// Stops at the first failing element and reports its index, with the
/// element-level failure nested inside.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::combinators::each;
/// use gatecheck_validator::validators::positive_id;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = each(positive_id());
/// assert!(v.validate(&json!([1, 2, 3])).is_ok());
/// assert!(v.validate(&json!([])).is_ok());
///
/// let err = v.validate(&json!([1, "x", 3])).unwrap_err();
/// assert_eq!(err.code, "element_invalid");
/// assert_eq!(err.param("index"), Some("1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator around an element validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Each<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(items) = input.as_array() else {
            return Err(ValidationError::type_mismatch("array", value_kind(input)));
        };

        for (index, element) in items.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                return Err(ValidationError::new(
                    "element_invalid",
                    format!("element at index {index} failed: {}", e.message),
                )
                .with_param("index", index.to_string())
                .with_nested_error(e));
            }
        }

        Ok(())
    }
}

/// Creates an [`Each`] combinator around an element validator.
pub fn each<V>(inner: V) -> Each<V> {
    Each::new(inner)
}
