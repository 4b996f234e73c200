//! Timestamp rendering.
//!
//! Raw timestamps arrive as epoch milliseconds (integer or float) or as text.
//! They are rendered as ISO-8601 in UTC with millisecond precision, e.g.
//! `2023-11-14T22:13:20.000Z`. Years outside `0..=9999` use the expanded
//! six-digit signed form (`+275760-09-13T00:00:00.000Z`).
//!
//! The representable range is ±8.64e15 ms around the epoch (±100,000,000
//! days). Anything outside it, and any unparseable text, is an invalid time
//! value: logged at `info` and rendered as the raw value. Value shapes that
//! cannot denote an instant at all are logged at `warn` with the same
//! fallback.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use super::RenderEnv;
use crate::core::value::RawValue;

/// Largest representable distance from the epoch, in milliseconds.
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const MILLIS_PER_DAY: i64 = 86_400_000;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Text layouts accepted without an explicit offset; read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Why a raw value could not be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConversionError {
    /// The value denotes no valid instant (out of range, unparseable).
    InvalidTime,
    /// The value's shape cannot be interpreted as a time at all.
    Unsupported(&'static str),
}

/// Render a raw timestamp value.
pub fn render_timestamp(value: &RawValue<'_>, _env: &RenderEnv) -> String {
    if value.is_null() {
        return String::new();
    }

    match to_epoch_millis(value) {
        Ok(ms) => format_epoch_millis(ms).unwrap_or_else(|| {
            info!(value = %value, "Error converting invalid time value");
            value.to_string()
        }),
        Err(ConversionError::InvalidTime) => {
            info!(value = %value, "Error converting invalid time value");
            value.to_string()
        }
        Err(ConversionError::Unsupported(shape)) => {
            warn!(value = %value, shape, "Error converting timestamp");
            value.to_string()
        }
    }
}

/// Resolve a raw value to epoch milliseconds.
///
/// Only numbers and text are interpreted. Booleans, byte data and structured
/// JSON are not coerced to an instant (a bool is not read as 0 or 1 ms, and
/// bytes are not parsed as text); they are reported as unsupported shapes.
fn to_epoch_millis(value: &RawValue<'_>) -> Result<i64, ConversionError> {
    match value {
        RawValue::Int(ms) => Ok(*ms),
        RawValue::Float(ms) => {
            if !ms.is_finite() || ms.trunc().abs() > MAX_EPOCH_MILLIS as f64 {
                return Err(ConversionError::InvalidTime);
            }
            Ok(ms.trunc() as i64)
        }
        RawValue::Text(text) => parse_text(text).ok_or(ConversionError::InvalidTime),
        RawValue::Json(serde_json::Value::String(text)) => {
            parse_text(text).ok_or(ConversionError::InvalidTime)
        }
        RawValue::Json(serde_json::Value::Number(n)) => match n.as_i64() {
            Some(ms) => Ok(ms),
            None => to_epoch_millis(&RawValue::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        other => Err(ConversionError::Unsupported(other.shape())),
    }
}

fn parse_text(text: &str) -> Option<i64> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Format epoch milliseconds as ISO-8601 UTC text.
///
/// Returns `None` outside ±[`MAX_EPOCH_MILLIS`].
pub fn format_epoch_millis(ms: i64) -> Option<String> {
    if !(-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&ms) {
        return None;
    }

    if let Some(dt) =
        DateTime::from_timestamp_millis(ms).filter(|dt| (0..=9999).contains(&dt.year()))
    {
        return Some(dt.format(ISO_FORMAT).to_string());
    }

    Some(format_extended_year(ms))
}

/// Expanded-year form for instants outside years `0..=9999`, part of which
/// lies beyond chrono's date range.
fn format_extended_year(ms: i64) -> String {
    let days = ms.div_euclid(MILLIS_PER_DAY);
    let in_day = ms.rem_euclid(MILLIS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let hour = in_day / 3_600_000;
    let minute = in_day / 60_000 % 60;
    let second = in_day / 1_000 % 60;
    let millis = in_day % 1_000;

    let sign = if year < 0 { '-' } else { '+' };

    format!(
        "{}{:06}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        sign,
        year.abs(),
        month,
        day,
        hour,
        minute,
        second,
        millis
    )
}

/// Proleptic Gregorian (year, month, day) for a count of days since 1970-01-01.
///
/// Works over the full ±100,000,000 day range, which exceeds what chrono's
/// date types can hold.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
