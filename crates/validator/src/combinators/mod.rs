//! Combinators that lift single-item validators over sequences
//!
//! The `every_*` predicates are all built from these: a sibling
//! single-item validator is held by value inside [`Each`] (or
//! [`UniqueEach`]) and applied element by element. [`OrNull`] makes an
//! element validator null-tolerant.
//!
//! # Examples
//!
//! ```rust
//! use gatecheck_validator::prelude::*;
//! use serde_json::json;
//!
//! // Every element must be a positive id, and distinct.
//! let v = unique_each(positive_id());
//! assert!(v.validate(&json!([1, 2, 3])).is_ok());
//! assert!(v.validate(&json!([1, 2, 2])).is_err());
//! ```

pub mod each;
pub mod or_null;
pub mod unique;

pub use each::{Each, each};
pub use or_null::{OrNull, or_null};
pub use unique::{UniqueEach, unique_each};
