//! Rule combinators
//!
//! [`Then<A, B>`] runs `A` and feeds its output into `B`. A field type is a
//! chain of `Then`s: before-steps that reshape raw input, a base step that
//! establishes the type, and after-steps that transform the parsed value.
//!
//! # Example
//!
//! ```rust
//! use grammarie::rule::{AsStr, Lowercase, Then, Typed};
//!
//! type Slug = Typed<Then<AsStr, Lowercase>>;
//!
//! assert_eq!(Slug::new("Hello").unwrap().get(), "hello");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Rule;
use crate::error::ConversionError;

/// Run `A`, then run `B` on its output
///
/// The first failing step stops the chain; `B` never sees input that `A`
/// rejected.
#[derive(Clone, Copy, Default)]
pub struct Then<A, B>(PhantomData<(A, B)>);

impl<A, B> fmt::Debug for Then<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Then<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

impl<In, A, B> Rule<In> for Then<A, B>
where
    A: Rule<In>,
    B: Rule<A::Output>,
{
    type Output = B::Output;

    fn apply(input: In) -> Result<Self::Output, ConversionError> {
        B::apply(A::apply(input)?)
    }

    fn description() -> &'static str {
        B::description()
    }
}
