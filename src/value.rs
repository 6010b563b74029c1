//! Raw field input
//!
//! A [`Value`] is what a rule sees before any conversion: the loosely-typed
//! content of a field as it arrives from a caller or a deserializer.
//! Conversions from the common Rust types are provided, so rules can be
//! invoked as `Decimal2::new(1.1)` or `IntTimestampS::new("2022-05-03T11:15:01Z")`.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use grammarie::Value;
//!
//! assert_eq!(Value::from("abc").kind(), "str");
//! assert_eq!(Value::from(42).kind(), "int");
//! assert_eq!(Value::from(Utc.timestamp_opt(0, 0).unwrap()).kind(), "datetime");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;

/// Loosely-typed input to a conversion rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Binary floating-point number
    Float(f64),
    /// Text
    Str(String),
    /// Exact decimal
    Decimal(Decimal),
    /// Zone-aware datetime
    DateTime(DateTime<FixedOffset>),
    /// Datetime without zone information
    NaiveDateTime(NaiveDateTime),
}

impl Value {
    /// Short name of the variant, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Decimal(_) => "decimal",
            Value::DateTime(_) => "datetime",
            Value::NaiveDateTime(_) => "naive datetime",
        }
    }

    /// Borrow the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::DateTime(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::NaiveDateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    #[test]
    fn test_kinds() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(true).kind(), "bool");
        assert_eq!(Value::from(7u8).kind(), "int");
        assert_eq!(Value::from(1.5).kind(), "float");
        assert_eq!(Value::from(Decimal::from_str("1.5").unwrap()).kind(), "decimal");
    }

    #[test]
    fn test_aware_datetime_keeps_offset() {
        let oslo = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = oslo.with_ymd_and_hms(2022, 5, 3, 13, 15, 1).unwrap();
        match Value::from(dt) {
            Value::DateTime(v) => {
                assert_eq!(v.offset().local_minus_utc(), 7200);
                assert_eq!(v.timestamp(), 1651576501);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_utc_datetime_becomes_zero_offset() {
        let dt = Utc.with_ymd_and_hms(2022, 5, 3, 11, 15, 1).unwrap();
        assert_eq!(
            Value::from(dt),
            Value::DateTime(dt.fixed_offset())
        );
    }

    #[test]
    fn test_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".into()));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::from(1).as_str(), None);
    }
}
