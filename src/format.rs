//! Date formatting.
//!
//! [`DateFormatter`] renders a [`DateLike`] value into one of the three
//! [`Layout`]s. The loosely-typed helpers in this module turn dynamic
//! [`Value`] arguments into typed options, raising validation errors that name
//! the offending parameter.

use crate::options::SEPARATOR_EXPECTED;
use crate::{DateFormatOptions, DateLike, Error, Layout, Result, Separator, Value};
use chrono::{Datelike, Timelike};
use log::trace;

/// Formats dates according to a fixed set of options.
///
/// The output always starts with the time prefix (`"HH:MM   "`, or nothing
/// when time is left out) followed by a single space and the date parts.
///
/// # Examples
///
/// ```rust
/// use utilkit::{DateFormatter, DateFormatOptions, Layout};
/// use chrono::NaiveDate;
///
/// let formatter = DateFormatter::new(DateFormatOptions::new());
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .unwrap()
///     .and_hms_opt(13, 7, 0)
///     .unwrap();
///
/// assert_eq!(formatter.format(dt, Layout::Us).unwrap(), "13:07    03/05/2024");
/// assert_eq!(formatter.format(dt, Layout::Database).unwrap(), "13:07    2024/03/05");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DateFormatter {
    options: DateFormatOptions,
}

impl DateFormatter {
    /// Creates a formatter with the given options.
    #[must_use]
    pub fn new(options: DateFormatOptions) -> Self {
        DateFormatter { options }
    }

    /// Returns the options this formatter was built with.
    #[must_use]
    pub fn options(&self) -> &DateFormatOptions {
        &self.options
    }

    /// Formats `date` in the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `date` cannot be read as an instant.
    pub fn format<D: DateLike>(&self, date: D, layout: Layout) -> Result<String> {
        let dt = date.to_naive_local()?;
        let sep = self.options.separator.as_str();

        let time = if self.options.include_time {
            format!("{:02}:{:02}   ", dt.hour(), dt.minute())
        } else {
            String::new()
        };

        let (year, month, day) = (dt.year(), dt.month(), dt.day());

        // The database layout joins month and day with '/' whatever the separator.
        let text = match layout {
            Layout::Eu => format!("{time} {day:02}{sep}{month:02}{sep}{year}"),
            Layout::Us => format!("{time} {month:02}{sep}{day:02}{sep}{year}"),
            Layout::Database => format!("{time} {year}{sep}{month:02}/{day:02}"),
        };

        trace!("Formatted {} as {:?} ({:?})", dt, text, layout);
        Ok(text)
    }
}

/// Reads the layout argument (param 2).
///
/// Blank values are rejected; anything else must read as a non-negative
/// integer under `parseInt` rules. Only numbers equal to a layout code select
/// that layout: numeric strings and fractions pass the check but compare
/// unequal, so they take the database layout.
pub(crate) fn layout_arg(value: &Value) -> Result<Layout> {
    if value.is_blank() || !value.reads_as_unsigned_integer() {
        return Err(Error::validation(2, "an integer", value.type_name()));
    }

    Ok(match value {
        Value::Number(n) => n.as_i64().map_or(Layout::Database, Layout::from_code),
        _ => Layout::Database,
    })
}

/// Reads the include-time argument (param 3). `None` means "not passed".
pub(crate) fn include_time_arg(value: Option<&Value>) -> Result<bool> {
    match value {
        None => Ok(true),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(Error::validation(3, "a boolean", other.type_name())),
    }
}

/// Reads the separator argument (param 4). `None` means "not passed".
pub(crate) fn separator_arg(value: Option<&Value>) -> Result<Separator> {
    match value {
        None => Ok(Separator::default()),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(Error::validation(4, SEPARATOR_EXPECTED, other.to_string())),
    }
}
