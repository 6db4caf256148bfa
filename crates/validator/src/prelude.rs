//! Prelude module for convenient imports.
//!
//! Provides a single `use gatecheck_validator::prelude::*;` import that
//! brings in the core traits, the error type, all built-in validators and
//! the combinators.
//!
//! # Examples
//!
//! ```rust
//! use gatecheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let v = unique_each(positive_id());
//! assert!(v.validate(&json!([1, 2, 3])).is_ok());
//! assert!(is_id(&json!(123)));
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult, value_kind};

pub use crate::combinators::{Each, OrNull, UniqueEach, each, or_null, unique_each};

pub use crate::validators::{
    DateString, Email, FieldsString, NotEmptyText, ObjectId, OneOf, PositiveId, SimplePhone,
    date_string, email, fields_string, not_empty_text, object_id, one_of, positive_id,
    simple_phone,
};

pub use crate::predicates::*;
