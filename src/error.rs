//! Error types for date formatting.
//!
//! Two kinds of failure exist:
//!
//! - **Validation**: an argument failed its type or value constraint. These are
//!   raised before any date work happens and name the offending parameter.
//! - **Invalid dates**: the date argument could not be turned into an instant.
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{format_date_value, Error, Value};
//!
//! let err = format_date_value(&Value::from("2024-03-05"), &Value::from("abc"), None, None)
//!     .unwrap_err();
//! assert!(matches!(err, Error::Validation { param: 2, .. }));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by the formatting helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument failed its type or value constraint.
    ///
    /// `param` is the 1-based position of the argument in `format_date`.
    #[error("Expected param {param} of format_date to be {expected}. Received {received} instead")]
    Validation {
        param: usize,
        expected: &'static str,
        received: String,
    },

    /// The date argument could not be converted into an instant.
    #[error("Invalid date: {input}")]
    InvalidDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

impl Error {
    /// Creates a validation error for the given parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::Error;
    ///
    /// let err = Error::validation(3, "a boolean", "string");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Expected param 3 of format_date to be a boolean. Received string instead"
    /// );
    /// ```
    pub fn validation(param: usize, expected: &'static str, received: impl Into<String>) -> Self {
        Error::Validation {
            param,
            expected,
            received: received.into(),
        }
    }

    /// Creates an invalid-date error with no underlying cause.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Error::InvalidDate {
            input: input.into(),
            source: None,
        }
    }

    /// Creates an invalid-date error carrying the parser's failure.
    pub fn unparseable_date(input: impl Into<String>, source: chrono::ParseError) -> Self {
        Error::InvalidDate {
            input: input.into(),
            source: Some(source),
        }
    }

    /// Returns the 1-based parameter index for validation errors.
    #[must_use]
    pub fn param(&self) -> Option<usize> {
        match self {
            Error::Validation { param, .. } => Some(*param),
            Error::InvalidDate { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_date_message_keeps_prefix() {
        let err = Error::invalid_date("not a date");
        assert_eq!(err.to_string(), "Invalid date: not a date");
        assert!(err.source().is_none());
        assert_eq!(err.param(), None);
    }

    #[test]
    fn test_invalid_date_exposes_parse_source() {
        let parse_err = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err();
        let err = Error::unparseable_date("nope", parse_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_separator_message_quotes_choices() {
        let err = Error::validation(4, "a \"/\" or \"-\"", "|");
        assert_eq!(
            err.to_string(),
            "Expected param 4 of format_date to be a \"/\" or \"-\". Received | instead"
        );
        assert_eq!(err.param(), Some(4));
    }
}
