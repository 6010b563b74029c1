//! Errors raised by conversion rules
//!
//! Every rule fails with a [`ConversionError`]. Errors fall into two
//! families (see [`ErrorKind`]):
//!
//! - **type mismatch**: the input does not have the shape the rule requires,
//!   for example a number handed to a string-only rule
//! - **parse**: the input has the right shape but its content cannot be
//!   interpreted, for example `"abc"` as a decimal or `"foo"` as a timezone
//!
//! # Example
//!
//! ```rust
//! use grammarie::{ConversionError, ErrorKind, TimeZone};
//!
//! let err = TimeZone::new("foo").unwrap_err();
//! assert_eq!(err, ConversionError::InvalidTimeZone("foo".to_string()));
//! assert_eq!(err.kind(), ErrorKind::Parse);
//! assert_eq!(err.to_string(), "Invalid timezone string: foo");
//! ```

use thiserror::Error;

/// Error produced when a rule rejects its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input is not of the type the rule accepts
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        /// What the rule accepts
        expected: &'static str,
        /// Kind of the value that was supplied
        found: &'static str,
    },

    /// String is not a decimal literal, or the number is not finite
    #[error("invalid decimal: {0:?}")]
    InvalidDecimal(String),

    /// Number does not fit in a fixed-point decimal
    #[error("decimal out of range: {0}")]
    DecimalOutOfRange(String),

    /// String cannot be read as a datetime
    #[error("invalid datetime: {0:?}")]
    InvalidDateTime(String),

    /// Epoch value or datetime lies outside the supported range
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    /// Name is not in the timezone database
    #[error("Invalid timezone string: {0}")]
    InvalidTimeZone(String),
}

/// Coarse classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input had the wrong type
    TypeMismatch,
    /// The input had the right type but unusable content
    Parse,
}

impl ConversionError {
    /// Build a type mismatch error.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        ConversionError::TypeMismatch { expected, found }
    }

    /// Which family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ConversionError::InvalidDecimal(_)
            | ConversionError::DecimalOutOfRange(_)
            | ConversionError::InvalidDateTime(_)
            | ConversionError::TimestampOutOfRange(_)
            | ConversionError::InvalidTimeZone(_) => ErrorKind::Parse,
        }
    }

    /// True when the input had the wrong type.
    pub fn is_type_mismatch(&self) -> bool {
        self.kind() == ErrorKind::TypeMismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ConversionError::type_mismatch("str", "int");
        assert_eq!(err.to_string(), "expected str, got int");
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_parse_errors_classified() {
        let errors = [
            ConversionError::InvalidDecimal("abc".into()),
            ConversionError::DecimalOutOfRange("1e300".into()),
            ConversionError::InvalidDateTime("yesterday".into()),
            ConversionError::TimestampOutOfRange("9e18".into()),
            ConversionError::InvalidTimeZone("foo".into()),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Parse);
        }
    }

    #[test]
    fn test_timezone_message_names_input() {
        let err = ConversionError::InvalidTimeZone("Mars/Olympus".into());
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}
