//! Flat predicate namespace
//!
//! One free function per check, each returning `bool`. This is the
//! surface application layers call to gate untrusted input; every
//! function is a thin delegation to the typed validator of the same
//! concern, so the two layers cannot drift apart.
//!
//! All predicates are total: any input shape, including `null`, wrong
//! type, or malformed structure, yields `false` (or `true` for the
//! documented vacuous cases) rather than a panic.
//!
//! # Examples
//!
//! ```rust
//! use gatecheck_validator::predicates::*;
//! use serde_json::json;
//!
//! assert!(is_email(&json!("valid-email@mail.com")));
//! assert!(!is_email(&json!("invalid email")));
//!
//! assert!(every_is_unique_id(&json!([1, 2, 3])));
//! assert!(!every_is_unique_id(&json!([1, 2, 2])));
//!
//! // Vacuous truth: an empty sequence always passes the every* checks.
//! assert!(every_is_object_id(&json!([])));
//! ```

use serde_json::Value;

use crate::combinators::{each, unique_each};
use crate::foundation::{Validate, ValidateExt};
use crate::validators::{
    DateString, FieldsString, OneOf, email, not_empty_text, object_id, positive_id, simple_phone,
};

/// True iff `value` is a string parsing as a date/time under `format`
/// (chrono `strftime` syntax), or under the default ISO 8601 family when
/// `format` is `None`.
#[must_use]
pub fn is_date_string(value: &Value, format: Option<&str>) -> bool {
    let validator = match format {
        Some(format) => DateString::with_format(format.to_owned()),
        None => DateString::iso8601(),
    };
    validator.validate(value).is_ok()
}

/// True iff `value` is a string of length >= 1.
#[must_use]
pub fn is_not_empty_string(value: &Value) -> bool {
    not_empty_text().validate(value).is_ok()
}

/// True iff `value` is a number strictly greater than zero.
///
/// Positive non-integers pass; integrality is not checked.
#[must_use]
pub fn is_id(value: &Value) -> bool {
    positive_id().validate(value).is_ok()
}

/// True iff `items` is an array whose every element passes [`is_id`].
/// An empty array is vacuously true.
#[must_use]
pub fn every_is_id(items: &Value) -> bool {
    each(positive_id()).validate(items).is_ok()
}

/// [`every_is_id`] plus: no duplicate elements by value equality.
#[must_use]
pub fn every_is_unique_id(items: &Value) -> bool {
    unique_each(positive_id()).validate(items).is_ok()
}

/// True iff `value` is a string of exactly 24 hexadecimal characters,
/// case-insensitive.
#[must_use]
pub fn is_object_id(value: &Value) -> bool {
    object_id().validate(value).is_ok()
}

/// True iff `items` is an array whose every element passes
/// [`is_object_id`]. An empty array is vacuously true.
#[must_use]
pub fn every_is_object_id(items: &Value) -> bool {
    each(object_id()).validate(items).is_ok()
}

/// [`every_is_object_id`] plus: no duplicate elements.
#[must_use]
pub fn every_is_unique_object_id(items: &Value) -> bool {
    unique_each(object_id()).validate(items).is_ok()
}

/// True iff `items` is an array whose every element is `null` or a valid
/// object-id string. An empty array is vacuously true.
#[must_use]
pub fn every_is_object_id_or_null(items: &Value) -> bool {
    each(object_id().or_null()).validate(items).is_ok()
}

/// [`every_is_object_id_or_null`] plus: no duplicates among the non-null
/// elements. Nulls are exempt and may repeat freely.
#[must_use]
pub fn every_is_unique_object_id_or_null(items: &Value) -> bool {
    unique_each(object_id().or_null())
        .nulls_exempt()
        .validate(items)
        .is_ok()
}

/// True iff `value` is a string matching the fixed email-shaped pattern
/// (permissive, not RFC-complete, case-insensitive).
#[must_use]
pub fn is_email(value: &Value) -> bool {
    email().validate(value).is_ok()
}

/// True iff `value` is a string of at least 8 characters starting with
/// `+`. No digit validation beyond that.
#[must_use]
pub fn is_simple_phone_number(value: &Value) -> bool {
    simple_phone().validate(value).is_ok()
}

/// True iff `items` is an array whose every element is a string appearing
/// in `allowed`. An empty array is vacuously true, whatever `allowed` is.
#[must_use]
pub fn every_is_allowed(items: &Value, allowed: &[&str]) -> bool {
    each(OneOf::new(allowed.iter().copied()))
        .validate(items)
        .is_ok()
}

/// [`every_is_allowed`] plus: no duplicate elements in `items`.
#[must_use]
pub fn every_is_unique_allowed(items: &Value, allowed: &[&str]) -> bool {
    unique_each(OneOf::new(allowed.iter().copied()))
        .validate(items)
        .is_ok()
}

/// True iff `value` is a string whose space-separated tokens all appear
/// among the space-separated tokens of `allowed`. An empty string is
/// vacuously true; any non-string is false.
#[must_use]
pub fn is_fields_string(value: &Value, allowed: &str) -> bool {
    FieldsString::new(allowed).validate(value).is_ok()
}
