//! Fixed-precision decimal steps
//!
//! [`to_decimal`] turns a string, integer, float or decimal into an exact
//! decimal with a fixed number of digits after the point:
//!
//! 1. strings are parsed exactly, floats are taken at their exact binary value
//! 2. the value is rounded half-to-even to `round_digits` (or `decimal_places`)
//! 3. the result is shown with exactly `decimal_places` digits, padding with
//!    zeros or dropping digits without rounding again
//!
//! # Example
//!
//! ```rust
//! use grammarie::rule::steps::decimal::to_decimal;
//! use grammarie::Value;
//!
//! let d = to_decimal(&Value::from(3.14159265358979), 2, None).unwrap();
//! assert_eq!(d.to_string(), "3.14");
//!
//! // Round to a whole number but keep two digits on display
//! let d = to_decimal(&Value::from(3.14159265358979), 2, Some(0)).unwrap();
//! assert_eq!(d.to_string(), "3.00");
//! ```

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ConversionError;
use crate::rule::Rule;
use crate::value::Value;

/// Largest scale a [`Decimal`] can hold.
const MAX_PLACES: u32 = 28;

/// Convert `value` to a decimal with exactly `decimal_places` digits after
/// the point.
///
/// `round_digits` only matters when trailing zeros are wanted: with
/// `decimal_places = 1` and `round_digits = Some(0)` the value is rounded to
/// an integer and shown as `X.0`.
///
/// Fails with [`ConversionError::DecimalOutOfRange`] when the value cannot
/// carry `decimal_places` digits in the 96-bit mantissa, or when more than
/// 28 places are asked for.
pub fn to_decimal(
    value: &Value,
    decimal_places: u32,
    round_digits: Option<u32>,
) -> Result<Decimal, ConversionError> {
    if decimal_places > MAX_PLACES {
        return Err(ConversionError::DecimalOutOfRange(format!(
            "{} decimal places",
            decimal_places
        )));
    }
    let exact = match value {
        Value::Str(s) => parse_decimal(s)?,
        Value::Int(n) => Decimal::from(*n),
        Value::Float(f) => decimal_from_float(*f)?,
        Value::Decimal(d) => *d,
        other => {
            return Err(ConversionError::type_mismatch(
                "str, int, float or decimal",
                other.kind(),
            ))
        }
    };

    let rounded = exact.round_dp_with_strategy(
        round_digits.unwrap_or(decimal_places),
        RoundingStrategy::MidpointNearestEven,
    );

    // display only: drop surplus digits, then pad to the exact scale
    let mut shown = rounded.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
    shown.rescale(decimal_places);
    // rescale stops short when the mantissa would overflow
    if shown.scale() != decimal_places {
        return Err(ConversionError::DecimalOutOfRange(exact.to_string()));
    }
    Ok(shown)
}

/// Parse a decimal literal without going through binary floating point.
///
/// Surrounding whitespace and scientific notation are accepted.
pub fn parse_decimal(s: &str) -> Result<Decimal, ConversionError> {
    let literal = s.trim();
    let parsed = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(literal)
    } else {
        Decimal::from_str(literal)
    };
    parsed.map_err(|_| ConversionError::InvalidDecimal(s.to_string()))
}

fn decimal_from_float(f: f64) -> Result<Decimal, ConversionError> {
    if !f.is_finite() {
        return Err(ConversionError::InvalidDecimal(f.to_string()));
    }
    Decimal::from_f64_retain(f).ok_or_else(|| ConversionError::DecimalOutOfRange(f.to_string()))
}

/// Round and display with `PLACES` digits after the point
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed<const PLACES: u32>;

impl<const PLACES: u32> Rule<Value> for Fixed<PLACES> {
    type Output = Decimal;

    fn apply(input: Value) -> Result<Decimal, ConversionError> {
        to_decimal(&input, PLACES, None)
    }

    fn description() -> &'static str {
        "fixed-precision decimal"
    }
}

/// Round to `DIGITS` digits, display with `PLACES` digits after the point
#[derive(Debug, Clone, Copy, Default)]
pub struct Rounded<const DIGITS: u32, const PLACES: u32>;

impl<const DIGITS: u32, const PLACES: u32> Rule<Value> for Rounded<DIGITS, PLACES> {
    type Output = Decimal;

    fn apply(input: Value) -> Result<Decimal, ConversionError> {
        to_decimal(&input, PLACES, Some(DIGITS))
    }

    fn description() -> &'static str {
        "rounded decimal"
    }
}
