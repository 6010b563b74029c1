//! # Grammarie
//!
//! Field types that convert as they validate.
//!
//! Each type wraps the output of a small, stateless rule chain. Building one
//! (directly with `new`, or through serde with the `serde` feature) converts
//! the raw input or fails with a [`ConversionError`]:
//!
//! - **Decimals**: [`WholeNumberDecimal`], [`Decimal1`], [`Decimal2`] round
//!   half-to-even and always show a fixed number of digits
//! - **Strings**: [`LowercaseStr`], [`UppercaseStr`]
//! - **Timestamps**: [`IntTimestampS`], [`IntTimestampMs`],
//!   [`FloatTimestampS`], [`FloatTimestampMs`] accept datetimes, ISO 8601
//!   strings and epoch numbers; [`StrTimestampIso`] accepts strings only and
//!   canonicalizes them
//! - **Timezones**: [`TimeZone`], [`TimeZoneString`]
//!
//! ## Quick Example
//!
//! ```rust
//! use grammarie::{Decimal2, IntTimestampS, TimeZone, UppercaseStr};
//!
//! let price = Decimal2::new("19.999").unwrap();
//! assert_eq!(price.to_string(), "20.00");
//!
//! let currency = UppercaseStr::new("nok").unwrap();
//! assert_eq!(currency.get(), "NOK");
//!
//! // The same instant, three ways
//! for input in ["2022-05-03T11:15:01Z", "2022-05-03 13:15:01+02:00", "1651576501"] {
//!     assert_eq!(*IntTimestampS::new(input).unwrap(), 1651576501);
//! }
//!
//! assert!(TimeZone::new("Europe/Oslo").is_ok());
//! assert!(TimeZone::new("foo").is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Deserialize`/`Serialize` for every field type
//! - `tracing`: debug events for rejected input
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod rule;
pub mod testing;
pub mod value;

// Re-exports
pub use error::{ConversionError, ErrorKind};
pub use rule::{
    Decimal1, Decimal2, FieldError, FieldErrors, FloatTimestampMs, FloatTimestampS, IntTimestampMs,
    IntTimestampS, LowercaseStr, Rule, StrTimestampIso, Then, TimeZone, TimeZoneString, Typed,
    UppercaseStr, ValidateAll, WholeNumberDecimal,
};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ConversionError, ErrorKind};
    pub use crate::rule::{
        Decimal1, Decimal2, FloatTimestampMs, FloatTimestampS, IntTimestampMs, IntTimestampS,
        LowercaseStr, StrTimestampIso, TimeZone, TimeZoneString, Typed, UppercaseStr,
        ValidateAll, WholeNumberDecimal,
    };
    pub use crate::value::Value;
}
