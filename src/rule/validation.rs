//! Field context and error accumulation
//!
//! A schema usually converts several fields at once and wants to report
//! every failure, not just the first one. [`Typed::validate_field`] tags a
//! conversion error with its field name, and [`ValidateAll`] combines a
//! tuple of such results into either all converted values or every error.
//!
//! # Example
//!
//! ```rust
//! use grammarie::{Decimal2, TimeZone, IntTimestampS, ValidateAll};
//!
//! let result = (
//!     Decimal2::validate_field("price", "12.345"),
//!     TimeZone::validate_field("tz", "foo"),
//!     IntTimestampS::validate_field("created", "never"),
//! )
//!     .validate_all();
//!
//! let errors = result.unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.fields(), vec!["tz", "created"]);
//! ```

use std::fmt;

use super::{Rule, Typed};
use crate::error::ConversionError;
use crate::value::Value;

/// Conversion error with the name of the field it came from
///
/// # Example
///
/// ```rust
/// use grammarie::{ConversionError, FieldError};
///
/// let err = FieldError {
///     field: "tz",
///     error: ConversionError::InvalidTimeZone("foo".into()),
/// };
/// assert_eq!(err.to_string(), "tz: Invalid timezone string: foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field name
    pub field: &'static str,
    /// The underlying error
    pub error: ConversionError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Every field error from one validation pass, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the failed fields
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Iterate over the errors
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Take the errors
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        FieldErrors(vec![error])
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl<R: Rule<Value>> Typed<R> {
    /// Run the rule, tagging a failure with `field`.
    pub fn validate_field(
        field: &'static str,
        input: impl Into<Value>,
    ) -> Result<Self, FieldError> {
        Self::new(input).map_err(|error| FieldError { field, error })
    }
}

/// Combine a tuple of field results, keeping every error
pub trait ValidateAll {
    /// The converted values when every field succeeds
    type Output;

    /// All values, or all field errors in tuple order
    fn validate_all(self) -> Result<Self::Output, FieldErrors>;
}

macro_rules! impl_validate_all {
    ($($T:ident),+) => {
        impl<$($T),+> ValidateAll for ($(Result<$T, FieldError>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Result<Self::Output, FieldErrors> {
                let ($($T,)+) = self;
                let mut errors = Vec::new();
                $(
                    let $T = match $T {
                        Ok(value) => Some(value),
                        Err(error) => {
                            errors.push(error);
                            None
                        }
                    };
                )+
                match ($($T,)+) {
                    ($(Some($T),)+) => Ok(($($T,)+)),
                    _ => Err(FieldErrors(errors)),
                }
            }
        }
    };
}

impl_validate_all!(A);
impl_validate_all!(A, B);
impl_validate_all!(A, B, C);
impl_validate_all!(A, B, C, D);
impl_validate_all!(A, B, C, D, E);
impl_validate_all!(A, B, C, D, E, F);
