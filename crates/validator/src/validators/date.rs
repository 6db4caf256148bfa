//! Date-string validator
//!
//! Classifies strings as parseable date/time values, either under a
//! caller-supplied `strftime` format or under the default ISO 8601 family.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::foundation::{Validate, ValidationError, value_kind};

/// Validates that a value is a string parsing as a date/time.
///
/// With no explicit format, accepts the ISO 8601 family: a full RFC 3339
/// timestamp, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or a bare
/// `YYYY-MM-DD` date. With an explicit format (chrono `strftime` syntax),
/// the string must parse under that format as a timestamp, a date, or a
/// time, tried in that order.
///
/// Any non-string input is rejected with a `type_mismatch` error; no
/// input can make validation panic (an unparseable format string simply
/// fails to match).
///
/// # Examples
///
/// ```rust
/// use gatecheck_validator::validators::DateString;
/// use gatecheck_validator::foundation::Validate;
/// use serde_json::json;
///
/// let iso = DateString::iso8601();
/// assert!(iso.validate(&json!("2016-01-01T00:00:00Z")).is_ok());
/// assert!(iso.validate(&json!("string")).is_err());
/// assert!(iso.validate(&json!(123)).is_err());
///
/// let ymd = DateString::with_format("%Y/%m/%d");
/// assert!(ymd.validate(&json!("2016/01/01")).is_ok());
/// assert!(ymd.validate(&json!("2016-01-01")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DateString {
    format: Option<Cow<'static, str>>,
}

impl DateString {
    /// Creates a validator for the default ISO 8601 family.
    #[must_use]
    pub fn iso8601() -> Self {
        Self { format: None }
    }

    /// Creates a validator for an explicit `strftime` format.
    #[must_use]
    pub fn with_format(format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }

    fn parses(&self, text: &str) -> bool {
        match &self.format {
            None => {
                DateTime::parse_from_rfc3339(text).is_ok()
                    || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
                    || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
            }
            Some(format) => {
                NaiveDateTime::parse_from_str(text, format).is_ok()
                    || DateTime::parse_from_str(text, format).is_ok()
                    || NaiveDate::parse_from_str(text, format).is_ok()
                    || NaiveTime::parse_from_str(text, format).is_ok()
            }
        }
    }
}

impl Default for DateString {
    fn default() -> Self {
        Self::iso8601()
    }
}

impl Validate for DateString {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", value_kind(input)));
        };

        if self.parses(text) {
            Ok(())
        } else {
            let format = self.format.as_deref().unwrap_or("ISO 8601");
            Err(
                ValidationError::new("invalid_date", "String does not parse as a date/time")
                    .with_param("format", format.to_string()),
            )
        }
    }
}

/// Creates a [`DateString`] validator for the default ISO 8601 family.
#[must_use]
pub fn date_string() -> DateString {
    DateString::iso8601()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod default_format {
        use super::*;

        #[test]
        fn accepts_rfc3339() {
            let v = date_string();
            assert!(v.validate(&json!("2016-01-01T00:00:00Z")).is_ok());
            assert!(v.validate(&json!("2016-01-01T12:30:00+02:00")).is_ok());
        }

        #[test]
        fn accepts_naive_timestamp() {
            let v = date_string();
            assert!(v.validate(&json!("2016-01-01T00:00:00")).is_ok());
        }

        #[test]
        fn accepts_bare_date() {
            let v = date_string();
            assert!(v.validate(&json!("2016-01-01")).is_ok());
        }

        #[test]
        fn rejects_garbage() {
            let v = date_string();
            assert!(v.validate(&json!("string")).is_err());
            assert!(v.validate(&json!("2016-13-01")).is_err());
            assert!(v.validate(&json!("")).is_err());
        }
    }

    mod explicit_format {
        use super::*;

        #[test]
        fn accepts_matching_date() {
            let v = DateString::with_format("%Y/%m/%d");
            assert!(v.validate(&json!("2016/01/31")).is_ok());
        }

        #[test]
        fn accepts_matching_naive_timestamp() {
            let v = DateString::with_format("%Y-%m-%d %H:%M:%S");
            assert!(v.validate(&json!("2016-01-01 10:20:30")).is_ok());
        }

        #[test]
        fn accepts_matching_time() {
            let v = DateString::with_format("%H:%M");
            assert!(v.validate(&json!("10:20")).is_ok());
        }

        #[test]
        fn rejects_mismatched_format() {
            let v = DateString::with_format("%Y/%m/%d");
            assert!(v.validate(&json!("2016-01-31")).is_err());
        }

        #[test]
        fn rejects_out_of_range_fields() {
            let v = DateString::with_format("%Y/%m/%d");
            assert!(v.validate(&json!("2016/02/31")).is_err());
        }

        #[test]
        fn malformed_format_never_panics() {
            let v = DateString::with_format("%Q%%%");
            assert!(v.validate(&json!("2016-01-01")).is_err());
        }
    }

    #[test]
    fn rejects_non_string_shapes() {
        let v = date_string();
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
