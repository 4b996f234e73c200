//! Raw column values as delivered by the execution layer.
//!
//! The in-memory shape of a value depends on the runtime that executed the
//! query: a server-side driver hands back its native byte buffer
//! ([`bytes::Bytes`]), other runtimes hand back a generic byte array, and
//! everything else arrives as a scalar or a structured JSON value.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use serde::{Serialize, Serializer};

/// A raw column value, prior to any dialect-specific rendering.
///
/// Uses `Cow` for string and byte data so callers can hand over borrowed
/// slices of a result buffer without copying.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use reltab_dialect::core::RawValue;
///
/// let borrowed: RawValue<'_> = RawValue::Text(Cow::Borrowed("hello"));
/// let owned: RawValue<'static> = borrowed.into_owned();
/// assert_eq!(owned.to_string(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<'a> {
    /// SQL NULL / absent value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value (also epoch milliseconds for timestamps).
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// Text data.
    Text(Cow<'a, str>),

    /// Native byte buffer of a server-side runtime.
    Buffer(Bytes),

    /// Generic byte array.
    Bytes(Cow<'a, [u8]>),

    /// Any other structured value.
    Json(serde_json::Value),
}

impl<'a> RawValue<'a> {
    /// Convert to a fully owned value with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> RawValue<'static> {
        match self {
            RawValue::Null => RawValue::Null,
            RawValue::Bool(v) => RawValue::Bool(v),
            RawValue::Int(v) => RawValue::Int(v),
            RawValue::Float(v) => RawValue::Float(v),
            RawValue::Text(v) => RawValue::Text(Cow::Owned(v.into_owned())),
            RawValue::Buffer(v) => RawValue::Buffer(v),
            RawValue::Bytes(v) => RawValue::Bytes(Cow::Owned(v.into_owned())),
            RawValue::Json(v) => RawValue::Json(v),
        }
    }

    /// Check if this value is NULL, including a structured JSON `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null | RawValue::Json(serde_json::Value::Null))
    }

    /// Short name of the value's shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::Buffer(_) => "buffer",
            RawValue::Bytes(_) => "bytes",
            RawValue::Json(_) => "json",
        }
    }
}

/// An absent value renders the same as NULL.
impl<'a> From<Option<RawValue<'a>>> for RawValue<'a> {
    fn from(value: Option<RawValue<'a>>) -> Self {
        value.unwrap_or(RawValue::Null)
    }
}

impl From<bool> for RawValue<'_> {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<i64> for RawValue<'_> {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<f64> for RawValue<'_> {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(v: &'a str) -> Self {
        RawValue::Text(Cow::Borrowed(v))
    }
}

impl From<String> for RawValue<'_> {
    fn from(v: String) -> Self {
        RawValue::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a [u8]> for RawValue<'a> {
    fn from(v: &'a [u8]) -> Self {
        RawValue::Bytes(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for RawValue<'_> {
    fn from(v: Vec<u8>) -> Self {
        RawValue::Bytes(Cow::Owned(v))
    }
}

impl From<Bytes> for RawValue<'_> {
    fn from(v: Bytes) -> Self {
        RawValue::Buffer(v)
    }
}

impl From<serde_json::Value> for RawValue<'_> {
    fn from(v: serde_json::Value) -> Self {
        RawValue::Json(v)
    }
}

/// Generic stringification. This is also the fallback text whenever a
/// kind-specific conversion gives up.
impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null | RawValue::Json(serde_json::Value::Null) => Ok(()),
            RawValue::Bool(v) => write!(f, "{}", v),
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::Float(v) => fmt_float(*v, f),
            RawValue::Text(v) => f.write_str(v),
            RawValue::Buffer(v) => f.write_str(&String::from_utf8_lossy(v)),
            RawValue::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            // Bare strings print without their JSON quotes
            RawValue::Json(serde_json::Value::String(s)) => f.write_str(s),
            RawValue::Json(v) => write!(f, "{}", v),
        }
    }
}

fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{}", v)
    }
}

/// Structured form used by the blob renderer's last-resort dump.
/// Byte data serializes as an array of numbers.
impl Serialize for RawValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Bool(v) => serializer.serialize_bool(*v),
            RawValue::Int(v) => serializer.serialize_i64(*v),
            RawValue::Float(v) => serializer.serialize_f64(*v),
            RawValue::Text(v) => serializer.serialize_str(v),
            RawValue::Buffer(v) => serializer.collect_seq(v.iter()),
            RawValue::Bytes(v) => serializer.collect_seq(v.iter()),
            RawValue::Json(v) => v.serialize(serializer),
        }
    }
}
