//! Core traits for the validation system

use crate::combinators::{Each, OrNull, UniqueEach};
use crate::foundation::ValidationError;

/// The core trait that all validators implement.
///
/// Generic over the input type; all built-in validators use
/// `serde_json::Value` so that arbitrary, possibly mistyped external input
/// can be handed to them directly. Validation is pure and synchronous:
/// no I/O, no shared state, no panics for any input shape.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::foundation::{Validate, ValidationError, value_kind};
/// use serde_json::{Value, json};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_f64() {
///             Some(n) if n >= 0.0 => Ok(()),
///             Some(_) => Err(ValidationError::new("negative", "must be >= 0")),
///             None => Err(ValidationError::type_mismatch("number", value_kind(input))),
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&json!(1)).is_ok());
/// assert!(NonNegative.validate(&json!("1")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if validation succeeds, `Err(ValidationError)`
    /// otherwise. Must never panic, whatever the input shape.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// Extension trait providing combinator constructors for validators.
///
/// Automatically implemented for all types that implement [`Validate`],
/// giving a fluent API for lifting a single-item validator over a
/// sequence or making it null-tolerant.
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::prelude::*;
/// use serde_json::json;
///
/// let v = object_id().or_null().each();
/// assert!(v.validate(&json!(["0123456789abcdefABCDEF00", null])).is_ok());
/// assert!(v.validate(&json!("not an array")).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Lifts this validator over a sequence: the input must be an array
    /// and every element must pass. An empty array passes vacuously.
    fn each(self) -> Each<Self> {
        Each::new(self)
    }

    /// Like [`each`](ValidateExt::each), additionally requiring that the
    /// elements are pairwise distinct by value equality.
    fn unique_each(self) -> UniqueEach<Self> {
        UniqueEach::new(self)
    }

    /// Accepts `null` outright, delegating everything else to this
    /// validator.
    fn or_null(self) -> OrNull<Self> {
        OrNull::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
