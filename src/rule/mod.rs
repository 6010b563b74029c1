//! Conversion rules and typed fields
//!
//! A field type in this crate is a [`Typed<R>`]: a value that has been
//! produced by running the raw input through the rule `R`. Rules are small
//! stateless steps implementing [`Rule`]; they are chained with [`Then`] so
//! that a field reads like a pipeline of before/after steps:
//!
//! ```text
//! Value --AsStr--> String --Lowercase--> String
//! Value --AsDateTime--> DateTime --EpochSeconds--> f64 --Truncate--> i64
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use grammarie::{Decimal2, IntTimestampS, LowercaseStr};
//!
//! let price = Decimal2::new(1.1).unwrap();
//! assert_eq!(price.to_string(), "1.10");
//!
//! let ts = IntTimestampS::new("2022-05-03T11:15:01Z").unwrap();
//! assert_eq!(*ts, 1651576501);
//!
//! let code = LowercaseStr::new("MiXeDcAsE").unwrap();
//! assert_eq!(code.get(), "mixedcase");
//! ```
//!
//! # Custom Rules
//!
//! ```rust
//! use grammarie::rule::{AsStr, Rule, Then, Typed};
//! use grammarie::ConversionError;
//!
//! pub struct Trim;
//!
//! impl Rule<String> for Trim {
//!     type Output = String;
//!
//!     fn apply(input: String) -> Result<String, ConversionError> {
//!         Ok(input.trim().to_string())
//!     }
//! }
//!
//! type TrimmedStr = Typed<Then<AsStr, Trim>>;
//!
//! assert_eq!(TrimmedStr::new("  hi ").unwrap().get(), "hi");
//! assert!(TrimmedStr::new(3).is_err());
//! ```

mod aliases;
mod combinators;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod steps;
mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::error::ConversionError;
use crate::value::Value;

pub use aliases::*;
pub use combinators::Then;
pub use steps::datetime::{AsDateTime, EpochSeconds, IsoFormat, SecondsToMillis, Truncate};
pub use steps::decimal::{Fixed, Rounded};
pub use steps::string::{AsStr, Lowercase, Uppercase};
pub use steps::timezone::{ResolveTimeZone, TimeZoneName};
pub use validation::{FieldError, FieldErrors, ValidateAll};

/// A single conversion step from `In` to [`Rule::Output`].
///
/// Rules are stateless: the type is the rule. Implementations must be
/// pure functions of their input.
///
/// # Example
///
/// ```rust
/// use grammarie::rule::Rule;
/// use grammarie::ConversionError;
///
/// pub struct Double;
///
/// impl Rule<i64> for Double {
///     type Output = i64;
///
///     fn apply(input: i64) -> Result<i64, ConversionError> {
///         Ok(input * 2)
///     }
/// }
///
/// assert_eq!(Double::apply(21).unwrap(), 42);
/// ```
pub trait Rule<In>: Send + Sync + 'static {
    /// Result of a successful conversion
    type Output;

    /// Convert the input
    fn apply(input: In) -> Result<Self::Output, ConversionError>;

    /// Human-readable description of the step
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The converted output of rule `R`.
///
/// A `Typed<R>` can only be built by running `R`, so it never holds raw,
/// unconverted input. This also applies to field defaults: a default is
/// produced through [`Typed::new`] like any other value.
///
/// # Example
///
/// ```rust
/// use grammarie::Decimal1;
///
/// let d = Decimal1::new("0.95").unwrap();
/// assert_eq!(d.to_string(), "1.0");
/// assert!(Decimal1::new("one").is_err());
/// ```
pub struct Typed<R: Rule<Value>> {
    value: R::Output,
    _rule: PhantomData<R>,
}

impl<R: Rule<Value>> Typed<R> {
    /// Run the rule on `input`.
    pub fn new(input: impl Into<Value>) -> Result<Self, ConversionError> {
        let input = input.into();
        #[cfg(feature = "tracing")]
        let kind = input.kind();

        R::apply(input)
            .map(|value| Self {
                value,
                _rule: PhantomData,
            })
            .map_err(|err| {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = R::description(),
                    input = kind,
                    error = %err,
                    "conversion rejected input"
                );
                err
            })
    }

    /// Get a reference to the converted value.
    #[inline]
    pub fn get(&self) -> &R::Output {
        &self.value
    }

    /// Consume the wrapper, returning the converted value.
    #[inline]
    pub fn into_inner(self) -> R::Output {
        self.value
    }
}

impl<R> fmt::Debug for Typed<R>
where
    R: Rule<Value>,
    R::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("value", &self.value)
            .field("rule", &R::description())
            .finish()
    }
}

impl<R> Clone for Typed<R>
where
    R: Rule<Value>,
    R::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R> PartialEq for Typed<R>
where
    R: Rule<Value>,
    R::Output: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Typed<R>
where
    R: Rule<Value>,
    R::Output: Eq,
{
}

impl<R> PartialOrd for Typed<R>
where
    R: Rule<Value>,
    R::Output: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<R: Rule<Value>> AsRef<R::Output> for Typed<R> {
    fn as_ref(&self) -> &R::Output {
        &self.value
    }
}

impl<R: Rule<Value>> std::ops::Deref for Typed<R> {
    type Target = R::Output;

    fn deref(&self) -> &R::Output {
        &self.value
    }
}

impl<R> fmt::Display for Typed<R>
where
    R: Rule<Value>,
    R::Output: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Rule<Value> for Even {
        type Output = i64;

        fn apply(input: Value) -> Result<i64, ConversionError> {
            match input {
                Value::Int(n) if n % 2 == 0 => Ok(n),
                Value::Int(n) => Err(ConversionError::InvalidDecimal(n.to_string())),
                other => Err(ConversionError::type_mismatch("int", other.kind())),
            }
        }

        fn description() -> &'static str {
            "even integer"
        }
    }

    type EvenInt = Typed<Even>;

    #[test]
    fn test_new_success() {
        let n = EvenInt::new(42).unwrap();
        assert_eq!(*n.get(), 42);
    }

    #[test]
    fn test_new_failure() {
        assert!(EvenInt::new(41).is_err());
        let err = EvenInt::new("42").unwrap_err();
        assert_eq!(err, ConversionError::type_mismatch("int", "str"));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(EvenInt::new(8).unwrap().into_inner(), 8);
    }

    #[test]
    fn test_eq_and_ord() {
        let a = EvenInt::new(2).unwrap();
        let b = EvenInt::new(4).unwrap();
        assert_eq!(a.clone(), a);
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_deref_and_display() {
        let n = EvenInt::new(10).unwrap();
        assert_eq!(*n + 1, 11);
        assert_eq!(n.to_string(), "10");
    }

    #[test]
    fn test_debug_names_rule() {
        let debug = format!("{:?}", EvenInt::new(6).unwrap());
        assert!(debug.contains("Typed"));
        assert!(debug.contains("even integer"));
    }
}
