//! Dynamic value representation for loosely-typed arguments.
//!
//! Callers that receive their arguments from an untyped source (JSON payloads,
//! scripting bridges, form fields) can hand them to
//! [`format_date_value`](crate::format_date_value) as [`Value`]s and get the
//! same validation errors a dynamically-typed caller would expect.
//!
//! ## Creating Values
//!
//! ```rust
//! use utilkit::{value, Value};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let layout = Value::from(2);
//! let text = Value::from("2024-03-05");
//!
//! let args = value!({
//!     "date": "2024-03-05",
//!     "layout": 1
//! });
//! assert!(args.is_object());
//! ```
//!
//! ## From JSON
//!
//! ```rust
//! use utilkit::Value;
//!
//! let value: Value = serde_json::from_str(r#"[1, "-", false]"#).unwrap();
//! assert_eq!(value.as_array().map(Vec::len), Some(3));
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered map used for object values.
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed argument value.
///
/// # Examples
///
/// ```rust
/// use utilkit::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// assert!(num.is_number());
/// assert_eq!(num.type_name(), "number");
/// assert_eq!(Value::from("yes").type_name(), "string");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Date(DateTime<FixedOffset>),
}

/// A numeric value, either integral or floating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64` if it has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::Number;
    ///
    /// assert_eq!(Number::Integer(7).as_i64(), Some(7));
    /// assert_eq!(Number::Float(7.0).as_i64(), Some(7));
    /// assert_eq!(Number::Float(7.5).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
                {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Name of the value's type, as reported in validation errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
        }
    }

    /// Whether the value counts as "nothing was passed".
    ///
    /// Null, the empty string, the strings `"null"` (any case) and
    /// `"undefined"`, and empty arrays or objects are all blank.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty() || s.eq_ignore_ascii_case("null") || s == "undefined",
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            _ => false,
        }
    }

    /// Whether the value passes the integer check: read the way `parseInt`
    /// reads it, the result must print as plain non-negative decimal digits.
    ///
    /// Numbers are read through their printed form, so floats at or above
    /// 1e21 (or below 1e-6) are read from their exponent notation. Booleans,
    /// collections and dates never pass.
    pub(crate) fn reads_as_unsigned_integer(&self) -> bool {
        let parsed = match self {
            Value::Number(Number::Integer(i)) => return *i >= 0,
            Value::Number(Number::Float(f)) if !f.is_finite() => return false,
            Value::Number(Number::Float(f)) => {
                let magnitude = f.abs();
                if magnitude >= PLAIN_DECIMAL_LIMIT || (magnitude != 0.0 && magnitude < 1e-6) {
                    parse_int(&format!("{:e}", f))
                } else {
                    parse_int(&f.trunc().to_string())
                }
            }
            Value::String(s) => parse_int(s),
            _ => None,
        };

        matches!(parsed, Some(n) if (0.0..PLAIN_DECIMAL_LIMIT).contains(&n))
    }
}

/// Numbers from here on print in exponent notation, which fails a digits-only check.
const PLAIN_DECIMAL_LIMIT: f64 = 1e21;

/// Optional leading whitespace and sign, then as many decimal digits as present.
fn parse_int(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let magnitude: f64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(arr) => write!(
                f,
                "{}",
                arr.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::Number(Number::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::Integer(i64::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Integer(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(Number::Integer(i64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Map> for Value {
    fn from(obj: Map) -> Self {
        Value::Object(obj)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::Date(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt.into())
    }
}
