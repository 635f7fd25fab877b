//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! `OptionT` is a monoid with `Absent` as its identity. `ResultT` has no
//! error value that could serve as an identity for every `E`, so it stays a
//! semigroup.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::{Monoid, Semigroup};
//!
//! let value = OptionT::present("hello");
//! assert_eq!(OptionT::empty().combine(value), value);
//! assert_eq!(value.combine(OptionT::empty()), value);
//! ```

use super::semigroup::Semigroup;
use crate::container::OptionT;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all values of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    /// use nullshield::typeclass::Monoid;
    ///
    /// let sources = [OptionT::absent(), OptionT::present("env"), OptionT::present("file")];
    /// assert_eq!(OptionT::combine_all(sources), OptionT::present("env"));
    /// assert_eq!(OptionT::<&str>::combine_all([]), OptionT::absent());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// OptionT Implementation
// =============================================================================

impl<T> Monoid for OptionT<T> {
    #[inline]
    fn empty() -> Self {
        Self::Absent
    }
}
