//! Serde support for typed fields (feature-gated)
//!
//! A [`Typed<R>`] deserializes by first reading a loosely-typed [`Value`]
//! and then running the rule, so a conversion failure becomes a
//! deserialization error. It serializes as its converted output.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use grammarie::{Decimal2, IntTimestampS, TimeZone};
//!
//! #[derive(Deserialize)]
//! struct Reading {
//!     value: Decimal2,
//!     taken_at: IntTimestampS,
//!     zone: TimeZone,
//! }
//!
//! let json = r#"{"value": 1.1, "taken_at": "2022-05-03T11:15:01Z", "zone": "Europe/Oslo"}"#;
//! let reading: Reading = serde_json::from_str(json).unwrap();
//! assert_eq!(reading.value.to_string(), "1.10");
//! assert_eq!(*reading.taken_at, 1651576501);
//! ```

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Rule, Typed};
use crate::value::Value;

impl<R> Serialize for Typed<R>
where
    R: Rule<Value>,
    R::Output: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, R: Rule<Value>> Deserialize<'de> for Typed<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Typed::new(value).map_err(de::Error::custom)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
