//! # utilkit
//!
//! Small, pure formatting helpers. The centrepiece is [`format_date`], which
//! renders a date in one of three fixed layouts:
//!
//! | Layout | Code | Output (time included, `/`) |
//! |--------|------|-----------------------------|
//! | EU | 1 | `13:07    05/03/2024` |
//! | US | 2 | `13:07    03/05/2024` |
//! | Database | any other | `13:07    2024/03/05` |
//!
//! The time prefix is `HH:MM` followed by three spaces, and the date parts
//! always follow a single leading space, so date-only output starts with a
//! space too.
//!
//! ## Quick Start
//!
//! ```rust
//! use utilkit::{format_date, format_date_with_options, DateFormatOptions, Layout, Separator};
//! use chrono::NaiveDate;
//!
//! let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(13, 7, 0)
//!     .unwrap();
//!
//! assert_eq!(format_date(dt, Layout::Us).unwrap(), "13:07    03/05/2024");
//!
//! let options = DateFormatOptions::date_only().with_separator(Separator::Dash);
//! assert_eq!(
//!     format_date_with_options(dt, Layout::Eu, &options).unwrap(),
//!     " 05-03-2024"
//! );
//! ```
//!
//! ### Loosely-typed arguments
//!
//! When arguments arrive untyped, [`format_date_value`] validates them first
//! and reports the offending parameter:
//!
//! ```rust
//! use utilkit::{format_date_value, Value};
//!
//! let date = Value::from("2024-03-05");
//! let text = format_date_value(&date, &Value::from(3), Some(&Value::from(false)), Some(&Value::from("-")))
//!     .unwrap();
//! assert_eq!(text, " 2024-03/05");
//!
//! let err = format_date_value(&date, &Value::from(1), None, Some(&Value::from("|"))).unwrap_err();
//! assert_eq!(err.param(), Some(4));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: textual dates that needed a
//! fallback pattern at `debug`, formatted results at `trace`. No logger is
//! installed.

pub mod date;
pub mod error;
pub mod escape;
pub mod format;
pub mod macros;
pub mod options;
pub mod value;

pub use date::{parse_date, DateLike};
pub use error::{Error, Result};
pub use escape::escape_string;
pub use format::DateFormatter;
pub use options::{DateFormatOptions, Layout, Separator};
pub use value::{Map, Number, Value};

/// Formats a date with the default options (time included, `/` separator).
///
/// # Examples
///
/// ```rust
/// use utilkit::{format_date, Layout};
///
/// let text = format_date("2024-03-05 13:07", Layout::Eu).unwrap();
/// assert_eq!(text, "13:07    05/03/2024");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `date` cannot be read as an instant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_date<D: DateLike>(date: D, layout: Layout) -> Result<String> {
    format_date_with_options(date, layout, &DateFormatOptions::default())
}

/// Formats a date with custom options.
///
/// # Examples
///
/// ```rust
/// use utilkit::{format_date_with_options, DateFormatOptions, Layout, Separator};
///
/// let options = DateFormatOptions::new().with_separator(Separator::Dash);
/// let text = format_date_with_options("2024-03-05 08:30", Layout::Database, &options).unwrap();
/// assert_eq!(text, "08:30    2024-03/05");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `date` cannot be read as an instant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_date_with_options<D: DateLike>(
    date: D,
    layout: Layout,
    options: &DateFormatOptions,
) -> Result<String> {
    DateFormatter::new(options.clone()).format(date, layout)
}

/// Formats a date from loosely-typed arguments.
///
/// Arguments are validated in order before the date is looked at:
///
/// - `layout` (param 2) must read as a non-negative integer. Only the numbers
///   `1` (EU) and `2` (US) select those layouts; everything else that passes,
///   numeric strings like `"1"` included, is the database layout.
/// - `include_time` (param 3) must be a boolean; `None` means `true`.
/// - `separator` (param 4) must be the string `"/"` or `"-"`; `None` means `"/"`.
///
/// # Examples
///
/// ```rust
/// use utilkit::{format_date_value, Error, Value};
///
/// let date = Value::from("2024-03-05");
/// let err = format_date_value(&date, &Value::from(1), Some(&Value::from("yes")), None)
///     .unwrap_err();
/// assert!(matches!(err, Error::Validation { param: 3, .. }));
/// ```
///
/// # Errors
///
/// Returns [`Error::Validation`] for a bad argument and [`Error::InvalidDate`]
/// if `date` cannot be read as an instant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_date_value(
    date: &Value,
    layout: &Value,
    include_time: Option<&Value>,
    separator: Option<&Value>,
) -> Result<String> {
    let layout = format::layout_arg(layout)?;
    let options = DateFormatOptions::new()
        .with_time(format::include_time_arg(include_time)?)
        .with_separator(format::separator_arg(separator)?);

    format_date_with_options(date, layout, &options)
}
