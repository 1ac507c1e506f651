//! Layout and configuration options for date formatting.
//!
//! This module provides the knobs that shape `format_date` output:
//!
//! - [`Layout`]: field order (EU, US or database)
//! - [`Separator`]: the character placed between date parts (`/` or `-`)
//! - [`DateFormatOptions`]: time inclusion and separator, builder style
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{format_date_with_options, DateFormatOptions, Layout, Separator};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let options = DateFormatOptions::new()
//!     .with_time(false)
//!     .with_separator(Separator::Dash);
//!
//! let text = format_date_with_options(date, Layout::Eu, &options).unwrap();
//! assert_eq!(text, " 05-03-2024");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which the date parts are written.
///
/// Layouts are selected by integer code: `1` is EU, `2` is US and every
/// other code falls through to the database layout.
///
/// # Examples
///
/// ```rust
/// use utilkit::Layout;
///
/// assert_eq!(Layout::from_code(1), Layout::Eu);
/// assert_eq!(Layout::from_code(2), Layout::Us);
/// assert_eq!(Layout::from_code(3), Layout::Database);
/// assert_eq!(Layout::from_code(42), Layout::Database);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `day/month/year`
    Eu,
    /// `month/day/year`
    Us,
    /// `year/month/day`
    #[default]
    Database,
}

impl Layout {
    /// Maps an integer layout code onto a layout.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Layout::Eu,
            2 => Layout::Us,
            _ => Layout::Database,
        }
    }
}

impl From<i64> for Layout {
    fn from(code: i64) -> Self {
        Layout::from_code(code)
    }
}

/// Character written between date parts.
///
/// # Examples
///
/// ```rust
/// use utilkit::Separator;
///
/// assert_eq!(Separator::Slash.as_str(), "/");
/// assert_eq!(Separator::Dash.as_str(), "-");
/// assert_eq!("-".parse::<Separator>().unwrap(), Separator::Dash);
/// assert!("|".parse::<Separator>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "-")]
    Dash,
}

impl Separator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Dash => "-",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "/" => Ok(Separator::Slash),
            "-" => Ok(Separator::Dash),
            other => Err(Error::validation(4, SEPARATOR_EXPECTED, other)),
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '/' => Ok(Separator::Slash),
            '-' => Ok(Separator::Dash),
            other => Err(Error::validation(4, SEPARATOR_EXPECTED, other.to_string())),
        }
    }
}

pub(crate) const SEPARATOR_EXPECTED: &str = "a \"/\" or \"-\"";

/// Options controlling `format_date` output.
///
/// Defaults match the loosely-typed entry point: time included, `/` separator.
/// Missing fields take their defaults when deserialized, so options can be
/// read straight out of a configuration file.
///
/// # Examples
///
/// ```rust
/// use utilkit::{DateFormatOptions, Separator};
///
/// let options = DateFormatOptions::new();
/// assert!(options.include_time);
/// assert_eq!(options.separator, Separator::Slash);
///
/// let options = DateFormatOptions::date_only().with_separator(Separator::Dash);
/// assert!(!options.include_time);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    pub include_time: bool,
    pub separator: Separator,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        DateFormatOptions {
            include_time: true,
            separator: Separator::default(),
        }
    }
}

impl DateFormatOptions {
    /// Creates default options (time included, `/` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that leave the time prefix out.
    #[must_use]
    pub fn date_only() -> Self {
        DateFormatOptions {
            include_time: false,
            ..Default::default()
        }
    }

    /// Sets whether the `HH:MM` prefix is written.
    #[must_use]
    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    /// Sets the separator between date parts.
    ///
    /// The database layout only applies it between year and month; its
    /// month/day join is always `/`.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }
}
