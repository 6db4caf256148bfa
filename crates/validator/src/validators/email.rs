//! Email format validator

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

// Deliberately permissive, not RFC-complete: local part of word characters
// and hyphens optionally dot-separated, domain labels, a 2-6 letter final
// label with an optional two-letter country suffix (".co.uk" style).
// Unicode is off so `\w` keeps its ASCII meaning; existing accept/reject
// behavior depends on this exact pattern.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::RegexBuilder::new(
        r"^([\w-]+(?:\.[\w-]+)*)@((?:[\w-]+\.)*\w[\w-]{0,66})\.([a-z]{2,6}(?:\.[a-z]{2})?)$",
    )
    .case_insensitive(true)
    .unicode(false)
    .build()
    .unwrap()
});

/// Validates email-shaped strings against a fixed permissive pattern.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::email;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = email();
/// assert!(v.validate(&json!("valid-email@mail.com")).is_ok());
/// assert!(v.validate(&json!("first.last@sub.example.co.uk")).is_ok());
/// assert!(v.validate(&json!("invalid email")).is_err());
/// assert!(v.validate(&json!(123)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Validate for Email {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if EMAIL_REGEX.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_email",
                "String is not an email address",
            ))
        }
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub const fn email() -> Email {
    Email
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_emails_pass() {
        let v = email();
        assert!(v.validate(&json!("valid-email@mail.com")).is_ok());
        assert!(v.validate(&json!("user@example.com")).is_ok());
        assert!(v.validate(&json!("first.last@example.com")).is_ok());
        assert!(v.validate(&json!("user-name@sub.example.org")).is_ok());
        assert!(v.validate(&json!("user@example.co.uk")).is_ok());
        assert!(v.validate(&json!("USER@EXAMPLE.COM")).is_ok());
    }

    #[test]
    fn invalid_emails_fail() {
        let v = email();
        assert!(v.validate(&json!("invalid email")).is_err());
        assert!(v.validate(&json!("")).is_err());
        assert!(v.validate(&json!("@example.com")).is_err());
        assert!(v.validate(&json!("user@")).is_err());
        assert!(v.validate(&json!("user@example")).is_err()); // no final label
        assert!(v.validate(&json!("user@example.c")).is_err()); // label too short
        assert!(v.validate(&json!("user@example.toolongtld")).is_err());
    }

    #[test]
    fn non_string_shapes_fail() {
        let v = email();
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
