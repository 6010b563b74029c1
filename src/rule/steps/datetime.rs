//! Datetime and timestamp steps
//!
//! [`AsDateTime`] is the base datetime step. It accepts:
//!
//! - zone-aware datetimes as they are, naive datetimes as UTC
//! - ISO 8601 strings: `YYYY-MM-DD`, optionally followed by `T`, `t`, `_`
//!   or a space and `HH:MM[:SS[.ffffff]]`, optionally followed by `Z`,
//!   `±HH:MM`, `±HHMM` or `±HH`; strings without an offset are UTC, and
//!   second `60` is rejected
//! - epoch numbers: seconds, or milliseconds when the magnitude exceeds
//!   `2e10`; strings holding one must be plain `[+-]digits[.digits]`, so
//!   `".5"`, `"5."` and `"1e9"` are not epoch values
//!
//! The after-steps turn the parsed datetime into epoch numbers
//! ([`EpochSeconds`], [`SecondsToMillis`], [`Truncate`]) or into the
//! canonical `YYYY-MM-DD HH:MM:SS±HH:MM` string ([`IsoFormat`]).
//!
//! # Example
//!
//! ```rust
//! use grammarie::{FloatTimestampMs, IntTimestampS, StrTimestampIso};
//!
//! assert_eq!(*IntTimestampS::new("2022-05-03 11:15:01Z").unwrap(), 1651576501);
//! assert_eq!(*FloatTimestampMs::new(1651576501).unwrap(), 1651576501000.0);
//! assert_eq!(
//!     StrTimestampIso::new("2022-05-03T13:15:01+02:00").unwrap().get(),
//!     "2022-05-03 13:15:01+02:00"
//! );
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};

use crate::error::ConversionError;
use crate::rule::Rule;
use crate::value::Value;

/// Epoch values with a larger magnitude are read as milliseconds.
const MS_THRESHOLD: i64 = 20_000_000_000;

/// Parse any supported datetime representation.
pub fn parse_datetime(value: &Value) -> Result<DateTime<FixedOffset>, ConversionError> {
    match value {
        Value::DateTime(dt) => Ok(*dt),
        Value::NaiveDateTime(naive) => Ok(naive.and_utc().fixed_offset()),
        Value::Str(s) => parse_datetime_str(s),
        Value::Int(n) => from_epoch_int(*n),
        Value::Float(f) => from_epoch_float(*f),
        other => Err(ConversionError::type_mismatch(
            "datetime, str, int or float",
            other.kind(),
        )),
    }
}

/// Parse an ISO 8601 string or a string holding an epoch number.
pub fn parse_datetime_str(s: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    if let Ok(n) = s.parse::<i64>() {
        return from_epoch_int(n);
    }
    if is_number_literal(s) {
        if let Ok(f) = s.parse::<f64>() {
            return from_epoch_float(f);
        }
    }
    parse_iso(s).ok_or_else(|| ConversionError::InvalidDateTime(s.to_string()))
}

/// Seconds since the epoch, with microsecond precision.
pub fn timestamp_from_dt(dt: &DateTime<FixedOffset>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1_000_000.0
}

/// Seconds to milliseconds.
pub fn s_to_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}

/// Format as `YYYY-MM-DD HH:MM:SS±HH:MM`, dropping sub-second digits.
pub fn iso_format(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

// `[+-]digits[.digits]`
fn is_number_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

fn from_epoch_int(n: i64) -> Result<DateTime<FixedOffset>, ConversionError> {
    let dt = if n.unsigned_abs() > MS_THRESHOLD as u64 {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    };
    dt.map(|dt| dt.fixed_offset())
        .ok_or_else(|| ConversionError::TimestampOutOfRange(n.to_string()))
}

fn from_epoch_float(f: f64) -> Result<DateTime<FixedOffset>, ConversionError> {
    if !f.is_finite() {
        return Err(ConversionError::InvalidDateTime(f.to_string()));
    }
    let seconds = if f.abs() > MS_THRESHOLD as f64 {
        f / 1000.0
    } else {
        f
    };
    let micros = (seconds * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
        return Err(ConversionError::TimestampOutOfRange(f.to_string()));
    }
    DateTime::from_timestamp_micros(micros as i64)
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| ConversionError::TimestampOutOfRange(f.to_string()))
}

fn parse_iso(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.len() < 10 || !s.is_char_boundary(10) {
        return None;
    }
    let (date_part, rest) = s.split_at(10);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;

    let mut chars = rest.chars();
    let Some(sep) = chars.next() else {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().fixed_offset());
    };
    if !matches!(sep, 'T' | 't' | '_' | ' ') {
        return None;
    }

    let (time_part, offset) = split_offset(chars.as_str())?;
    let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
        .ok()?;
    // chrono marks a leap second with nanoseconds past one billion
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }
    offset.from_local_datetime(&date.and_time(time)).single()
}

fn split_offset(s: &str) -> Option<(&str, FixedOffset)> {
    if let Some(time) = s.strip_suffix(['Z', 'z']) {
        return Some((time, FixedOffset::east_opt(0)?));
    }
    match s.rfind(['+', '-']) {
        Some(idx) => {
            let (time, offset) = s.split_at(idx);
            Some((time, parse_offset(offset)?))
        }
        None => Some((s, FixedOffset::east_opt(0)?)),
    }
}

// `+HH:MM`, `+HHMM` or `+HH`
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits: String = s[1..].chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Base datetime step
#[derive(Debug, Clone, Copy, Default)]
pub struct AsDateTime;

impl Rule<Value> for AsDateTime {
    type Output = DateTime<FixedOffset>;

    fn apply(input: Value) -> Result<Self::Output, ConversionError> {
        parse_datetime(&input)
    }

    fn description() -> &'static str {
        "datetime"
    }
}

impl Rule<String> for AsDateTime {
    type Output = DateTime<FixedOffset>;

    fn apply(input: String) -> Result<Self::Output, ConversionError> {
        parse_datetime_str(&input)
    }

    fn description() -> &'static str {
        "datetime"
    }
}

/// Datetime to floating-point epoch seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochSeconds;

impl Rule<DateTime<FixedOffset>> for EpochSeconds {
    type Output = f64;

    fn apply(input: DateTime<FixedOffset>) -> Result<f64, ConversionError> {
        Ok(timestamp_from_dt(&input))
    }

    fn description() -> &'static str {
        "epoch seconds"
    }
}

/// Seconds to milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondsToMillis;

impl Rule<f64> for SecondsToMillis {
    type Output = f64;

    fn apply(input: f64) -> Result<f64, ConversionError> {
        Ok(s_to_ms(input))
    }

    fn description() -> &'static str {
        "epoch milliseconds"
    }
}

/// Truncate toward zero to an integer
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncate;

impl Rule<f64> for Truncate {
    type Output = i64;

    fn apply(input: f64) -> Result<i64, ConversionError> {
        let truncated = input.trunc();
        if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return Err(ConversionError::TimestampOutOfRange(input.to_string()));
        }
        Ok(truncated as i64)
    }

    fn description() -> &'static str {
        "integer"
    }
}

/// Datetime to canonical `YYYY-MM-DD HH:MM:SS±HH:MM`
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoFormat;

impl Rule<DateTime<FixedOffset>> for IsoFormat {
    type Output = String;

    fn apply(input: DateTime<FixedOffset>) -> Result<String, ConversionError> {
        Ok(iso_format(&input))
    }

    fn description() -> &'static str {
        "ISO 8601 string"
    }
}
