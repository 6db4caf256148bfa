//! UNIQUE-EACH combinator - per-element validation plus distinctness

use serde_json::Value;

use crate::combinators::Each;
use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates every element of a JSON array and requires the elements to be
/// pairwise distinct by value equality.
///
/// Element validation is delegated to an inner [`Each`]; the distinctness
/// scan is a linear `Vec` of seen references, since `serde_json::Value` is
/// not hashable. With [`nulls_exempt`](UniqueEach::nulls_exempt), `null`
/// entries are skipped by the distinctness check and may repeat freely
/// (the element validator still sees them).
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::prelude::*;
/// use serde_json::json;
///
/// let v = unique_each(object_id().or_null()).nulls_exempt();
/// assert!(v.validate(&json!(["0123456789abcdefABCDEF00", null, null])).is_ok());
///
/// let dup = json!(["0123456789abcdefABCDEF00", "0123456789abcdefABCDEF00"]);
/// assert!(v.validate(&dup).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniqueEach<V> {
    each: Each<V>,
    nulls_exempt: bool,
}

impl<V> UniqueEach<V> {
    /// Creates a new UNIQUE-EACH combinator around an element validator.
    pub fn new(inner: V) -> Self {
        Self {
            each: Each::new(inner),
            nulls_exempt: false,
        }
    }

    /// Exempts `null` entries from the distinctness check.
    #[must_use = "builder methods must be chained or built"]
    pub fn nulls_exempt(mut self) -> Self {
        self.nulls_exempt = true;
        self
    }
}

impl<V> Validate for UniqueEach<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(items) = input.as_array() else {
            return Err(ValidationError::type_mismatch("array", value_kind(input)));
        };

        self.each.validate(input)?;

        let mut seen: Vec<&Value> = Vec::with_capacity(items.len());
        for (index, element) in items.iter().enumerate() {
            if self.nulls_exempt && element.is_null() {
                continue;
            }
            if seen.contains(&element) {
                return Err(ValidationError::new(
                    "duplicate_element",
                    format!("element at index {index} duplicates an earlier element"),
                )
                .with_param("index", index.to_string()));
            }
            seen.push(element);
        }

        Ok(())
    }
}

/// Creates a [`UniqueEach`] combinator around an element validator.
pub fn unique_each<V>(inner: V) -> UniqueEach<V> {
    UniqueEach::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{object_id, positive_id};
    use serde_json::json;

    #[test]
    fn distinct_elements_pass() {
        let v = unique_each(positive_id());
        assert!(v.validate(&json!([1, 2, 3])).is_ok());
    }

    #[test]
    fn duplicate_elements_fail() {
        let v = unique_each(positive_id());
        let err = v.validate(&json!([1, 2, 2])).unwrap_err();
        assert_eq!(err.code, "duplicate_element");
        assert_eq!(err.param("index"), Some("2"));
    }

    #[test]
    fn element_validation_runs_before_distinctness() {
        let v = unique_each(positive_id());
        let err = v.validate(&json!(["x", "x"])).unwrap_err();
        assert_eq!(err.code, "element_invalid");
    }

    #[test]
    fn empty_array_passes() {
        let v = unique_each(positive_id());
        assert!(v.validate(&json!([])).is_ok());
    }

    #[test]
    fn non_array_is_type_mismatch() {
        let v = unique_each(positive_id());
        let err = v.validate(&json!("not an array")).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
    }

    #[test]
    fn nulls_exempt_allows_repeated_nulls() {
        let v = unique_each(object_id().or_null()).nulls_exempt();
        assert!(
            v.validate(&json!(["0123456789abcdefABCDEF00", null, null]))
                .is_ok()
        );
    }

    #[test]
    fn nulls_exempt_still_rejects_duplicate_values() {
        let v = unique_each(object_id().or_null()).nulls_exempt();
        let dup = json!([
            "0123456789abcdefABCDEF00",
            "0123456789abcdefABCDEF00",
            null,
            null
        ]);
        assert!(v.validate(&dup).is_err());
    }

    #[test]
    fn without_exemption_repeated_nulls_are_duplicates() {
        let v = unique_each(object_id().or_null());
        let err = v.validate(&json!([null, null])).unwrap_err();
        assert_eq!(err.code, "duplicate_element");
    }
}
