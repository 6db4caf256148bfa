//! Historical predicate names
//!
//! An older naming scheme (`is_valid_*` / `is_all_valid_*`) shipped
//! alongside the canonical one and maps 1:1 in behavior. These aliases
//! delegate to the canonical functions in [`predicates`](crate::predicates)
//! so callers can migrate without a behavior change; new code should use
//! the canonical names.

use serde_json::Value;

use crate::predicates;

/// Deprecated alias for [`predicates::is_date_string`].
#[deprecated(since = "0.1.0", note = "renamed to `is_date_string`")]
#[must_use]
pub fn is_valid_date_string(value: &Value, format: Option<&str>) -> bool {
    predicates::is_date_string(value, format)
}

/// Deprecated alias for [`predicates::is_not_empty_string`].
#[deprecated(since = "0.1.0", note = "renamed to `is_not_empty_string`")]
#[must_use]
pub fn is_valid_not_empty_string(value: &Value) -> bool {
    predicates::is_not_empty_string(value)
}

/// Deprecated alias for [`predicates::is_id`].
#[deprecated(since = "0.1.0", note = "renamed to `is_id`")]
#[must_use]
pub fn is_valid_id(value: &Value) -> bool {
    predicates::is_id(value)
}

/// Deprecated alias for [`predicates::every_is_id`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_id`")]
#[must_use]
pub fn is_all_valid_id(items: &Value) -> bool {
    predicates::every_is_id(items)
}

/// Deprecated alias for [`predicates::every_is_unique_id`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_unique_id`")]
#[must_use]
pub fn is_all_unique_valid_id(items: &Value) -> bool {
    predicates::every_is_unique_id(items)
}

/// Deprecated alias for [`predicates::is_object_id`].
#[deprecated(since = "0.1.0", note = "renamed to `is_object_id`")]
#[must_use]
pub fn is_valid_object_id(value: &Value) -> bool {
    predicates::is_object_id(value)
}

/// Deprecated alias for [`predicates::every_is_object_id`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_object_id`")]
#[must_use]
pub fn is_all_valid_object_id(items: &Value) -> bool {
    predicates::every_is_object_id(items)
}

/// Deprecated alias for [`predicates::every_is_unique_object_id`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_unique_object_id`")]
#[must_use]
pub fn is_all_unique_valid_object_id(items: &Value) -> bool {
    predicates::every_is_unique_object_id(items)
}

/// Deprecated alias for [`predicates::every_is_object_id_or_null`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_object_id_or_null`")]
#[must_use]
pub fn is_all_valid_object_id_or_null(items: &Value) -> bool {
    predicates::every_is_object_id_or_null(items)
}

/// Deprecated alias for [`predicates::every_is_unique_object_id_or_null`].
#[deprecated(
    since = "0.1.0",
    note = "renamed to `every_is_unique_object_id_or_null`"
)]
#[must_use]
pub fn is_all_unique_valid_object_id_or_null(items: &Value) -> bool {
    predicates::every_is_unique_object_id_or_null(items)
}

/// Deprecated alias for [`predicates::is_email`].
#[deprecated(since = "0.1.0", note = "renamed to `is_email`")]
#[must_use]
pub fn is_valid_email(value: &Value) -> bool {
    predicates::is_email(value)
}

/// Deprecated alias for [`predicates::is_simple_phone_number`].
#[deprecated(since = "0.1.0", note = "renamed to `is_simple_phone_number`")]
#[must_use]
pub fn is_valid_simple_phone_number(value: &Value) -> bool {
    predicates::is_simple_phone_number(value)
}

/// Deprecated alias for [`predicates::every_is_allowed`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_allowed`")]
#[must_use]
pub fn is_all_allowed(items: &Value, allowed: &[&str]) -> bool {
    predicates::every_is_allowed(items, allowed)
}

/// Deprecated alias for [`predicates::every_is_unique_allowed`].
#[deprecated(since = "0.1.0", note = "renamed to `every_is_unique_allowed`")]
#[must_use]
pub fn is_all_unique_allowed(items: &Value, allowed: &[&str]) -> bool {
    predicates::every_is_unique_allowed(items, allowed)
}

/// Deprecated alias for [`predicates::is_fields_string`].
#[deprecated(since = "0.1.0", note = "renamed to `is_fields_string`")]
#[must_use]
pub fn is_valid_fields_string(value: &Value, allowed: &str) -> bool {
    predicates::is_fields_string(value, allowed)
}
