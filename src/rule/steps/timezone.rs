//! Timezone steps
//!
//! Names are resolved against the IANA database compiled into `chrono-tz`.
//! A name that does not resolve fails with
//! [`ConversionError::InvalidTimeZone`] carrying the offending input.
//!
//! # Example
//!
//! ```rust
//! use grammarie::{TimeZone, TimeZoneString};
//!
//! assert_eq!(*TimeZone::new("Europe/Oslo").unwrap(), chrono_tz::Europe::Oslo);
//! assert_eq!(TimeZoneString::new("UTC").unwrap().get(), "UTC");
//! assert!(TimeZoneString::new("foo").is_err());
//! ```

use chrono_tz::Tz;

use crate::error::ConversionError;
use crate::rule::Rule;

/// Resolve a timezone name.
pub fn str_to_tz(name: &str) -> Result<Tz, ConversionError> {
    name.parse::<Tz>().map_err(|_err| {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = name, error = %_err, "timezone lookup failed");
        ConversionError::InvalidTimeZone(name.to_string())
    })
}

/// Timezone name to resolved timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveTimeZone;

impl Rule<String> for ResolveTimeZone {
    type Output = Tz;

    fn apply(input: String) -> Result<Tz, ConversionError> {
        str_to_tz(&input)
    }

    fn description() -> &'static str {
        "timezone"
    }
}

/// Resolved timezone back to its name
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZoneName;

impl Rule<Tz> for TimeZoneName {
    type Output = String;

    fn apply(input: Tz) -> Result<String, ConversionError> {
        Ok(input.name().to_string())
    }

    fn description() -> &'static str {
        "timezone name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_names() {
        assert_eq!(str_to_tz("Europe/Oslo").unwrap(), chrono_tz::Europe::Oslo);
        assert_eq!(str_to_tz("UTC").unwrap(), chrono_tz::UTC);
        assert_eq!(str_to_tz("America/New_York").unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            str_to_tz("foo").unwrap_err(),
            ConversionError::InvalidTimeZone("foo".to_string())
        );
        assert!(str_to_tz("").is_err());
        assert!(str_to_tz("Europe/Atlantis").is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for name in ["Europe/Oslo", "UTC", "Asia/Kolkata"] {
            let tz = ResolveTimeZone::apply(name.to_string()).unwrap();
            assert_eq!(TimeZoneName::apply(tz).unwrap(), name);
        }
    }
}
