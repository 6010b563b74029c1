//! Testing utilities for field types
//!
//! Assertion macros for conversions, a fixture listing every supported
//! representation of one instant, and property-based testing support.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use grammarie::{assert_converts, assert_rejects, Decimal2, TimeZone};
//!
//! assert_converts!(Decimal2, 1.1, |d: &rust_decimal::Decimal| d.to_string() == "1.10");
//! assert_rejects!(TimeZone, "foo");
//! ```
//!
//! ## Instant Fixtures
//!
//! ```rust
//! use grammarie::testing::{instant_inputs, REFERENCE_EPOCH_S};
//! use grammarie::IntTimestampS;
//!
//! for input in instant_inputs() {
//!     assert_eq!(*IntTimestampS::new(input).unwrap(), REFERENCE_EPOCH_S);
//! }
//! ```

use chrono::TimeZone as _;

use crate::value::Value;

/// Epoch seconds of the reference instant `2022-05-03T11:15:01Z`.
pub const REFERENCE_EPOCH_S: i64 = 1651576501;

/// Epoch milliseconds of the reference instant.
pub const REFERENCE_EPOCH_MS: i64 = REFERENCE_EPOCH_S * 1000;

/// Every supported representation of the reference instant.
///
/// Two zone-aware datetimes, two ISO string formats, and integer and
/// floating-point epoch seconds and milliseconds.
pub fn instant_inputs() -> Vec<Value> {
    vec![
        chrono_tz::UTC
            .timestamp_opt(REFERENCE_EPOCH_S, 0)
            .single()
            .map(Value::from)
            .unwrap_or(Value::Null),
        chrono::Utc
            .timestamp_opt(REFERENCE_EPOCH_S, 0)
            .single()
            .map(Value::from)
            .unwrap_or(Value::Null),
        Value::from("2022-05-03T11:15:01Z"),
        Value::from("2022-05-03 11:15:01Z"),
        Value::from(REFERENCE_EPOCH_S),
        Value::from(REFERENCE_EPOCH_S as f64),
        Value::from(REFERENCE_EPOCH_MS),
        Value::from(REFERENCE_EPOCH_MS as f64),
    ]
}

/// Assert that a field type accepts the input.
///
/// The optional third argument is a predicate over the converted output.
///
/// # Example
///
/// ```rust
/// use grammarie::{assert_converts, LowercaseStr};
///
/// assert_converts!(LowercaseStr, "ABC");
/// assert_converts!(LowercaseStr, "ABC", |s: &String| s == "abc");
/// ```
#[macro_export]
macro_rules! assert_converts {
    ($field:ty, $input:expr) => {
        if let Err(e) = <$field>::new($input) {
            panic!("Expected conversion to succeed, got error: {}", e);
        }
    };
    ($field:ty, $input:expr, $check:expr) => {
        match <$field>::new($input) {
            Ok(v) => {
                if !($check)(v.get()) {
                    panic!("Converted value failed the check: {:?}", v.get());
                }
            }
            Err(e) => panic!("Expected conversion to succeed, got error: {}", e),
        }
    };
}

/// Assert that a field type rejects the input.
///
/// # Example
///
/// ```rust
/// use grammarie::{assert_rejects, StrTimestampIso};
///
/// assert_rejects!(StrTimestampIso, 1651576501);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($field:ty, $input:expr) => {
        if let Ok(v) = <$field>::new($input) {
            panic!("Expected conversion to fail, got: {:?}", v.get());
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            ".*".prop_map(Value::Str),
            (any::<i64>(), 0u32..10).prop_map(|(n, scale)| {
                Value::Decimal(rust_decimal::Decimal::new(n, scale))
            }),
            (-62_135_596_800i64..253_402_300_799, -86_399i32..86_400).prop_map(|(secs, off)| {
                chrono::FixedOffset::east_opt(off)
                    .and_then(|tz| tz.timestamp_opt(secs, 0).single())
                    .map(Value::from)
                    .unwrap_or(Value::Null)
            }),
        ]
        .boxed()
    }
}
