//! Named field types
//!
//! Each alias is a [`Typed`] field with a fixed rule chain. They are the
//! public face of the crate: put them on struct fields and the raw input is
//! converted when the struct is built or deserialized.
//!
//! | Alias | Output |
//! |---|---|
//! | [`WholeNumberDecimal`] | `Decimal` rounded to an integer, shown with one digit |
//! | [`Decimal1`] | `Decimal` with one digit after the point |
//! | [`Decimal2`] | `Decimal` with two digits after the point |
//! | [`LowercaseStr`] / [`UppercaseStr`] | case-normalized `String` |
//! | [`IntTimestampS`] / [`IntTimestampMs`] | integer epoch seconds / milliseconds |
//! | [`FloatTimestampS`] / [`FloatTimestampMs`] | floating-point epoch seconds / milliseconds |
//! | [`StrTimestampIso`] | `YYYY-MM-DD HH:MM:SS±HH:MM` string, string input only |
//! | [`TimeZone`] | resolved `chrono_tz::Tz` |
//! | [`TimeZoneString`] | validated timezone name |
//!
//! # Example
//!
//! ```rust
//! use grammarie::{Decimal2, IntTimestampMs, TimeZoneString, WholeNumberDecimal};
//!
//! assert_eq!(WholeNumberDecimal::new(0.9).unwrap().to_string(), "1.0");
//! assert_eq!(Decimal2::new("1.0001").unwrap().to_string(), "1.00");
//! assert_eq!(*IntTimestampMs::new("2022-05-03T11:15:01Z").unwrap(), 1651576501000);
//! assert_eq!(TimeZoneString::new("Europe/Oslo").unwrap().get(), "Europe/Oslo");
//! ```

use super::combinators::Then;
use super::steps::datetime::{AsDateTime, EpochSeconds, IsoFormat, SecondsToMillis, Truncate};
use super::steps::decimal::{Fixed, Rounded};
use super::steps::string::{AsStr, Lowercase, Uppercase};
use super::steps::timezone::{ResolveTimeZone, TimeZoneName};
use super::Typed;

// ============================================================================
// Decimals
// ============================================================================

/// Decimal rounded to the nearest integer, shown with a single `0` after the point
pub type WholeNumberDecimal = Typed<Rounded<0, 1>>;

/// Decimal with 1 digit after the point
pub type Decimal1 = Typed<Fixed<1>>;

/// Decimal with 2 digits after the point
pub type Decimal2 = Typed<Fixed<2>>;

// ============================================================================
// Strings
// ============================================================================

/// String converted to lowercase
pub type LowercaseStr = Typed<Then<AsStr, Lowercase>>;

/// String converted to uppercase
pub type UppercaseStr = Typed<Then<AsStr, Uppercase>>;

// ============================================================================
// Timestamps
// ============================================================================

/// Integer seconds since the epoch.
///
/// The input can be a datetime, an ISO 8601 string, or an epoch number in
/// seconds or milliseconds.
pub type IntTimestampS = Typed<Then<AsDateTime, Then<EpochSeconds, Truncate>>>;

/// Integer milliseconds since the epoch
pub type IntTimestampMs =
    Typed<Then<AsDateTime, Then<EpochSeconds, Then<SecondsToMillis, Truncate>>>>;

/// Floating-point seconds since the epoch
pub type FloatTimestampS = Typed<Then<AsDateTime, EpochSeconds>>;

/// Floating-point milliseconds since the epoch
pub type FloatTimestampMs = Typed<Then<AsDateTime, Then<EpochSeconds, SecondsToMillis>>>;

/// Datetime string validated by parsing it and formatting it back.
///
/// Only strings are accepted, even though epoch numbers denote valid instants.
pub type StrTimestampIso = Typed<Then<AsStr, Then<AsDateTime, IsoFormat>>>;

// ============================================================================
// Timezones
// ============================================================================

/// Resolved timezone
pub type TimeZone = Typed<Then<AsStr, ResolveTimeZone>>;

/// Timezone name that is known to resolve
pub type TimeZoneString = Typed<Then<AsStr, Then<ResolveTimeZone, TimeZoneName>>>;
