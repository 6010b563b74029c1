//! String steps
//!
//! [`AsStr`] is the base string step: it accepts only [`Value::Str`] and
//! never coerces numbers or other values into text. [`Lowercase`] and
//! [`Uppercase`] run after it.
//!
//! # Example
//!
//! ```rust
//! use grammarie::{LowercaseStr, UppercaseStr};
//!
//! assert_eq!(LowercaseStr::new("MiXeDcAsE").unwrap().get(), "mixedcase");
//! assert_eq!(UppercaseStr::new("MiXeDcAsE").unwrap().get(), "MIXEDCASE");
//! assert!(LowercaseStr::new(12).is_err());
//! ```

use crate::error::ConversionError;
use crate::rule::Rule;
use crate::value::Value;

/// Input must be a string
#[derive(Debug, Clone, Copy, Default)]
pub struct AsStr;

impl Rule<Value> for AsStr {
    type Output = String;

    fn apply(input: Value) -> Result<String, ConversionError> {
        match input {
            Value::Str(s) => Ok(s),
            other => Err(ConversionError::type_mismatch("str", other.kind())),
        }
    }

    fn description() -> &'static str {
        "string"
    }
}

/// Map every character to lowercase
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Rule<String> for Lowercase {
    type Output = String;

    fn apply(input: String) -> Result<String, ConversionError> {
        Ok(input.to_lowercase())
    }

    fn description() -> &'static str {
        "lowercase string"
    }
}

/// Map every character to uppercase
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Rule<String> for Uppercase {
    type Output = String;

    fn apply(input: String) -> Result<String, ConversionError> {
        Ok(input.to_uppercase())
    }

    fn description() -> &'static str {
        "uppercase string"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: [&str; 3] = ["UPPERCASE", "lowercase", "MiXeDcAsE"];

    #[test]
    fn test_as_str_accepts_only_strings() {
        assert_eq!(AsStr::apply(Value::from("x")).unwrap(), "x");
        assert_eq!(
            AsStr::apply(Value::from(1)).unwrap_err(),
            ConversionError::type_mismatch("str", "int")
        );
        assert!(AsStr::apply(Value::Null).is_err());
    }

    #[test]
    fn test_lowercase() {
        for s in INPUTS {
            assert_eq!(Lowercase::apply(s.to_string()).unwrap(), s.to_lowercase());
        }
    }

    #[test]
    fn test_uppercase() {
        for s in INPUTS {
            assert_eq!(Uppercase::apply(s.to_string()).unwrap(), s.to_uppercase());
        }
    }

    #[test]
    fn test_idempotent() {
        let once = Lowercase::apply("MiXeD".to_string()).unwrap();
        assert_eq!(Lowercase::apply(once.clone()).unwrap(), once);
        let once = Uppercase::apply("MiXeD".to_string()).unwrap();
        assert_eq!(Uppercase::apply(once.clone()).unwrap(), once);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(Lowercase::apply("ÆØÅ".to_string()).unwrap(), "æøå");
        assert_eq!(Uppercase::apply("straße".to_string()).unwrap(), "STRASSE");
    }
}
