//! # gatecheck-validator
//!
//! Stateless input-validation predicates for gating untrusted input before
//! further processing: identifiers, date strings, email/phone formats,
//! allow-lists and unique-set checks.
//!
//! Untrusted input arrives as [`serde_json::Value`], so every check is a
//! total function over every possible input shape: a mistyped, `null`, or
//! malformed value yields `false` (or a structured error at the typed
//! layer) rather than a panic.
//!
//! ## Quick Start
//!
//! The flat predicate namespace answers yes/no:
//!
//! ```rust
//! use gatecheck_validator::predicates::*;
//! use serde_json::json;
//!
//! assert!(is_object_id(&json!("0123456789abcdefABCDEF00")));
//! assert!(every_is_id(&json!([1, 2, 3])));
//! assert!(!every_is_id(&json!([1, "x", 3])));
//! assert!(every_is_allowed(&json!(["a", "b"]), &["a", "b", "c"]));
//! ```
//!
//! ## Typed Layer
//!
//! Each predicate is backed by a small validator struct implementing
//! [`Validate`](foundation::Validate), returning a structured
//! [`ValidationError`](foundation::ValidationError) on rejection. The
//! `every_*` predicates compose the sibling single-item validator through
//! the [`Each`](combinators::Each) / [`UniqueEach`](combinators::UniqueEach)
//! combinators:
//!
//! ```rust
//! use gatecheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let v = unique_each(object_id().or_null()).nulls_exempt();
//! assert!(v.validate(&json!(["0123456789abcdefABCDEF00", null, null])).is_ok());
//! ```

// ValidationError is returned by value from every validator; boxing it would
// add indirection to every call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod legacy;
pub mod predicates;
pub mod prelude;
pub mod validators;

pub use predicates::*;
