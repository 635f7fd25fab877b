//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets each step
//! depend on the value produced by the previous one and short-circuits on
//! `Absent` or `Err`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> OptionT<i32> {
//!     OptionT::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Monad::flat_map(OptionT::present("42"), parse_positive)
//!     .and_then(|n| OptionT::present(n * 2));
//! assert_eq!(result, OptionT::present(84));
//! ```

use super::applicative::Applicative;
use crate::container::{OptionT, ResultT};

/// A type class for monads.
pub trait Monad: Applicative {
    /// Applies a function returning a monadic value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    /// use nullshield::typeclass::Monad;
    ///
    /// let first: ResultT<i32, &str> = ResultT::ok(1);
    /// assert_eq!(first.then(ResultT::ok("next")), ResultT::ok("next"));
    ///
    /// let failed: ResultT<i32, &str> = ResultT::err("stop");
    /// assert_eq!(failed.then(ResultT::ok("next")), ResultT::err("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// OptionT<T> Implementation
// =============================================================================

impl<T> Monad for OptionT<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> OptionT<B>
    where
        F: FnOnce(T) -> OptionT<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// ResultT<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for ResultT<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> ResultT<B, E>
    where
        F: FnOnce(T) -> ResultT<B, E>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn checked_double<M>(value: M) -> M::WithType<i32>
    where
        M: Monad<Inner = i32>,
    {
        value.flat_map(|n| M::pure(n * 2))
    }

    #[rstest]
    fn generic_code_runs_on_both_containers() {
        assert_eq!(checked_double(OptionT::present(21)), OptionT::present(42));
        assert_eq!(checked_double(ResultT::<i32, String>::ok(21)), ResultT::ok(42));
        assert_eq!(
            checked_double(ResultT::<i32, String>::err("no".into())),
            ResultT::err("no".to_string())
        );
    }

    #[rstest]
    fn option_then_short_circuits() {
        assert_eq!(OptionT::<i32>::absent().then(OptionT::present(1)), OptionT::absent());
        assert_eq!(OptionT::present(0).then(OptionT::present(1)), OptionT::present(1));
    }
}
