//! Object-id string validator
//!
//! A 24-character hexadecimal token, the document-identifier format of
//! certain document stores.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

static OBJECT_ID_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9a-fA-F]{24}$").unwrap());

/// Validates that a value is a string of exactly 24 hexadecimal
/// characters, case-insensitive.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::object_id;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let v = object_id();
/// assert!(v.validate(&json!("0123456789abcdefABCDEF00")).is_ok());
/// assert!(v.validate(&json!("invalid id")).is_err());
/// assert!(v.validate(&json!(123)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectId;

impl Validate for ObjectId {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if OBJECT_ID_REGEX.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_object_id",
                "Expected a 24-character hexadecimal string",
            ))
        }
    }
}

/// Creates an [`ObjectId`] validator.
#[must_use]
pub const fn object_id() -> ObjectId {
    ObjectId
}
