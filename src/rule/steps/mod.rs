//! Conversion steps the field types are built from
//!
//! - **Decimal**: [`Fixed`](decimal::Fixed), [`Rounded`](decimal::Rounded)
//! - **String**: [`AsStr`](string::AsStr), [`Lowercase`](string::Lowercase), [`Uppercase`](string::Uppercase)
//! - **Datetime**: [`AsDateTime`](datetime::AsDateTime), [`EpochSeconds`](datetime::EpochSeconds),
//!   [`SecondsToMillis`](datetime::SecondsToMillis), [`Truncate`](datetime::Truncate),
//!   [`IsoFormat`](datetime::IsoFormat)
//! - **Timezone**: [`ResolveTimeZone`](timezone::ResolveTimeZone), [`TimeZoneName`](timezone::TimeZoneName)
//!
//! Each module also exposes the plain helper functions the steps wrap, for
//! callers that want the conversion without a typed field.

pub mod datetime;
pub mod decimal;
pub mod string;
pub mod timezone;
