//! Error type for validation failures
//!
//! A structured error with an error code, a human-readable message,
//! parameterized details, and optional nested errors (used by collection
//! combinators to point at the failing element).
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// A structured validation error.
///
/// Uses `Cow<'static, str>` for zero-allocation when error codes and
/// messages are known at compile time (the common case).
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("not_allowed", "value is not in the allow-list")
///     .with_param("value", "d");
/// assert_eq!(error.code, "not_allowed");
/// assert_eq!(error.param("value"), Some("d"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "type_mismatch", "not_positive", "element_invalid"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Parameters for the error, as ordered key-value pairs.
    ///
    /// Typically 0-2 params; inline storage avoids a heap allocation
    /// for that case.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Nested validation errors.
    ///
    /// Collection combinators attach the element-level failure here.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Creates a "type_mismatch" error.
    ///
    /// Every validator in this crate guards its type assumption with this
    /// error before doing any semantic check.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        for error in &self.nested {
            write!(f, "\n  caused by: {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}
