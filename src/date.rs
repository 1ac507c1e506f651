//! Conversion of date-like inputs into wall-clock instants.
//!
//! [`DateLike`] is implemented for the chrono date types, for text, and for
//! dynamic [`Value`]s. Values carrying an offset are rendered in that offset;
//! nothing is converted to the machine's local zone, so output does not depend
//! on where the code runs.
//!
//! ## Accepted text
//!
//! Text is trimmed and tried as RFC 3339, then RFC 2822, then a table of
//! common date-time and date-only patterns:
//!
//! ```rust
//! use utilkit::parse_date;
//!
//! let dt = parse_date("2024-03-05 13:07").unwrap();
//! assert_eq!(dt.to_string(), "2024-03-05 13:07:00");
//!
//! let dt = parse_date("March 5, 2024").unwrap();
//! assert_eq!(dt.to_string(), "2024-03-05 00:00:00");
//!
//! assert!(parse_date("next tuesday").is_err());
//! ```

use crate::{Error, Number, Result, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;

const DATE_TIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// A value that can be read as a point in time.
///
/// # Examples
///
/// ```rust
/// use utilkit::DateLike;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let dt = date.to_naive_local().unwrap();
/// assert_eq!(dt.to_string(), "2024-03-05 00:00:00");
///
/// let dt = "2024-03-05T13:07:00+02:00".to_naive_local().unwrap();
/// assert_eq!(dt.to_string(), "2024-03-05 13:07:00");
/// ```
pub trait DateLike {
    /// Returns the wall-clock date and time this value denotes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] when the value has no date reading.
    fn to_naive_local(&self) -> Result<NaiveDateTime>;
}

impl DateLike for NaiveDateTime {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        Ok(*self)
    }
}

impl DateLike for NaiveDate {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::invalid_date(self.to_string()))
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        Ok(self.naive_local())
    }
}

impl DateLike for str {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        parse_date(self)
    }
}

impl DateLike for String {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        parse_date(self)
    }
}

impl DateLike for Value {
    /// Dates are used as-is, strings are parsed and numbers are read as
    /// milliseconds since the Unix epoch (UTC).
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        match self {
            Value::Date(dt) => Ok(dt.naive_local()),
            Value::String(s) => parse_date(s),
            Value::Number(n) => from_epoch_millis(n),
            other => Err(Error::invalid_date(other.to_string())),
        }
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_naive_local(&self) -> Result<NaiveDateTime> {
        (**self).to_naive_local()
    }
}

/// Parses text into a wall-clock date and time.
///
/// Date-only inputs resolve to midnight. Inputs with an offset keep their own
/// wall-clock reading.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] carrying the last parser failure when no
/// pattern matches.
pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    let text = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }

    let mut last_err = match DateTime::parse_from_rfc2822(text) {
        Ok(dt) => return Ok(dt.naive_local()),
        Err(e) => e,
    };

    for pattern in DATE_TIME_PATTERNS {
        match NaiveDateTime::parse_from_str(text, pattern) {
            Ok(dt) => {
                debug!("Parsed date {:?} with pattern {}", input, pattern);
                return Ok(dt);
            }
            Err(e) => last_err = e,
        }
    }

    for pattern in DATE_PATTERNS {
        match NaiveDate::parse_from_str(text, pattern) {
            Ok(date) => {
                debug!("Parsed date {:?} with pattern {}", input, pattern);
                return date.to_naive_local();
            }
            Err(e) => last_err = e,
        }
    }

    Err(Error::unparseable_date(input, last_err))
}

fn from_epoch_millis(n: &Number) -> Result<NaiveDateTime> {
    let millis = match *n {
        Number::Integer(i) => Some(i),
        Number::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Number::Float(_) => None,
    };

    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::invalid_date(n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_variants() {
        let expected = ymd_hm(2024, 3, 5, 13, 7);
        assert_eq!(parse_date("2024-03-05T13:07:00").unwrap(), expected);
        assert_eq!(parse_date("2024-03-05 13:07").unwrap(), expected);
        assert_eq!(parse_date("2024-03-05T13:07").unwrap(), expected);
        assert_eq!(parse_date("  2024/03/05 13:07  ").unwrap(), expected);
        assert_eq!(parse_date("03/05/2024 13:07").unwrap(), expected);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_date("2024-03-05T13:07:09.250").unwrap();
        assert_eq!(dt.second(), 9);
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_keeps_offset_wall_clock() {
        assert_eq!(
            parse_date("2024-03-05T13:07:00-05:00").unwrap(),
            ymd_hm(2024, 3, 5, 13, 7)
        );
        assert_eq!(
            parse_date("Tue, 5 Mar 2024 13:07:00 +0100").unwrap(),
            ymd_hm(2024, 3, 5, 13, 7)
        );
    }

    #[test]
    fn test_parse_date_only() {
        let midnight = ymd_hm(2024, 3, 5, 0, 0);
        assert_eq!(parse_date("2024-03-05").unwrap(), midnight);
        assert_eq!(parse_date("03/05/2024").unwrap(), midnight);
        assert_eq!(parse_date("Mar 5 2024").unwrap(), midnight);
        assert_eq!(parse_date("5 March 2024").unwrap(), midnight);
    }

    #[test]
    fn test_parse_failure_keeps_cause() {
        use std::error::Error as _;

        let err = parse_date("2024-13-45").unwrap_err();
        assert!(err.to_string().starts_with("Invalid date: "));
        assert!(err.to_string().contains("2024-13-45"));
        assert!(err.source().is_some());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_value_inputs() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 3, 5, 13, 7, 0).unwrap();
        assert_eq!(
            Value::from(dt).to_naive_local().unwrap(),
            ymd_hm(2024, 3, 5, 13, 7)
        );

        // 2024-03-05T13:07:00Z
        let millis = Value::from(1_709_644_020_000_i64);
        assert_eq!(millis.to_naive_local().unwrap(), ymd_hm(2024, 3, 5, 13, 7));

        assert!(Value::from(true).to_naive_local().is_err());
        assert!(Value::Null.to_naive_local().is_err());
        assert!(Value::from(f64::NAN).to_naive_local().is_err());
    }
}
