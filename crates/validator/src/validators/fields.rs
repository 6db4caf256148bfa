//! Fields-string validator
//!
//! Validates a space-separated field-selection string (the shape of a
//! `?fields=a b c` query parameter) against an allow-list given in the
//! same space-separated form.

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates that a value is a space-separated string whose every token
/// appears among the allowed tokens.
///
/// An empty string passes vacuously (no fields requested). Tokens are
/// produced by splitting on single `' '` characters on both sides, so
/// consecutive spaces yield empty tokens that must also be allowed.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::fields_string;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = fields_string("a b c");
/// assert!(v.validate(&json!("")).is_ok());
/// assert!(v.validate(&json!("a b c")).is_ok());
/// assert!(v.validate(&json!("a x")).is_err());
/// assert!(v.validate(&json!(123)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FieldsString {
    allowed: String,
}

impl FieldsString {
    /// Creates a validator from a space-separated allow-list.
    pub fn new(allowed: impl Into<String>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }
}

impl Validate for FieldsString {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if text.is_empty() {
            return Ok(());
        }

        for token in text.split(' ') {
            if !self.allowed.split(' ').any(|allowed| allowed == token) {
                return Err(
                    ValidationError::new("field_not_allowed", "Field is not in the allow-list")
                        .with_param("field", token.to_string()),
                );
            }
        }

        Ok(())
    }
}

/// Creates a [`FieldsString`] validator from a space-separated allow-list.
pub fn fields_string(allowed: impl Into<String>) -> FieldsString {
    FieldsString::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_string_is_vacuously_valid() {
        let v = fields_string("a b c");
        assert!(v.validate(&json!("")).is_ok());
    }

    #[test]
    fn all_tokens_allowed() {
        let v = fields_string("a b c");
        assert!(v.validate(&json!("a b c")).is_ok());
        assert!(v.validate(&json!("a")).is_ok());
        assert!(v.validate(&json!("c a")).is_ok());
    }

    #[test]
    fn disallowed_token_fails() {
        let v = fields_string("a b c");
        let err = v.validate(&json!("a x")).unwrap_err();
        assert_eq!(err.code, "field_not_allowed");
        assert_eq!(err.param("field"), Some("x"));
    }

    #[test]
    fn joined_tokens_are_not_split() {
        // "ab" is a single token, not "a" followed by "b".
        let v = fields_string("a b c");
        assert!(v.validate(&json!("ab")).is_err());
    }

    #[test]
    fn consecutive_spaces_yield_empty_tokens() {
        let v = fields_string("a b c");
        assert!(v.validate(&json!("a  b")).is_err());
    }

    #[test]
    fn non_string_shapes_fail() {
        let v = fields_string("a b c");
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
