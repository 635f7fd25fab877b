//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Instances
//!
//! Both containers combine by *choice*, not by merging payloads:
//!
//! - `OptionT::combine` is [`OptionT::or`]: the first `Present` wins.
//! - `ResultT::combine` is [`ResultT::or`]: the first `Ok` wins, otherwise
//!   the last `Err` is kept.
//!
//! No bound is placed on the payload types.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::Semigroup;
//!
//! let first: OptionT<i32> = OptionT::absent();
//! let second = OptionT::present(2);
//! let third = OptionT::present(3);
//!
//! assert_eq!(first.combine(second).combine(third), OptionT::present(2));
//! ```

use crate::container::{OptionT, ResultT};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all values of a non-empty iterator, or returns `None` if it
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    /// use nullshield::typeclass::Semigroup;
    ///
    /// let values = vec![OptionT::absent(), OptionT::present(1), OptionT::present(2)];
    /// assert_eq!(OptionT::reduce_all(values), Some(OptionT::present(1)));
    /// assert_eq!(OptionT::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// OptionT Implementation
// =============================================================================

impl<T> Semigroup for OptionT<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.or(other)
    }
}

// =============================================================================
// ResultT Implementation
// =============================================================================

impl<T, E> Semigroup for ResultT<T, E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.or(other)
    }
}
