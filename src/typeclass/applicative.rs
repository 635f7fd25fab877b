//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - Lifting a pure value into the context (`pure`)
//! - Combining independent values with a function (`map2`, `map3`)
//! - Applying a wrapped function to a wrapped value (`apply`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Evaluation Order
//!
//! Every method inspects its receiver first and its arguments left to right.
//! `apply` is `map2` with function application, so the function operand is
//! inspected before the value. For `ResultT` this means that when several
//! operands are `Err`, `map2`, `map3`, `product*` and `apply` all return the
//! error of the leftmost failing operand, the receiver's when it fails.
//!
//! The inherent [`ResultT::ap`] follows the same rule with the value as its
//! receiver, so `value.ap(function)` reports the value's error first.
//!
//! [`ResultT::ap`]: crate::container::ResultT::ap
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::Applicative;
//!
//! let lifted: OptionT<i32> = <OptionT<()>>::pure(42);
//! assert_eq!(lifted, OptionT::present(42));
//!
//! let sum = OptionT::present(1).map2(OptionT::present(2), |x, y| x + y);
//! assert_eq!(sum, OptionT::present(3));
//!
//! let pair = OptionT::present(1).product(OptionT::present("hello"));
//! assert_eq!(pair, OptionT::present((1, "hello")));
//! ```

use super::functor::Functor;
use crate::container::{OptionT, ResultT};

/// A type class for applicative functors.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring both contexts to succeed.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring both contexts to succeed.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    /// use nullshield::typeclass::Applicative;
    ///
    /// let function = OptionT::present(|x: i32| x + 1);
    /// assert_eq!(function.apply(OptionT::present(5)), OptionT::present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// OptionT<T> Implementation
// =============================================================================

impl<T> Applicative for OptionT<T> {
    #[inline]
    fn pure<B>(value: B) -> OptionT<B> {
        OptionT::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: OptionT<B>, function: F) -> OptionT<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (OptionT::Present(a), OptionT::Present(b)) => OptionT::Present(function(a, b)),
            _ => OptionT::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: OptionT<B>, third: OptionT<C>, function: F) -> OptionT<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (OptionT::Present(a), OptionT::Present(b), OptionT::Present(c)) => {
                OptionT::Present(function(a, b, c))
            }
            _ => OptionT::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: OptionT<B>) -> OptionT<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// ResultT<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for ResultT<T, E> {
    #[inline]
    fn pure<B>(value: B) -> ResultT<B, E> {
        ResultT::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: ResultT<B, E>, function: F) -> ResultT<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (ResultT::Ok(a), ResultT::Ok(b)) => ResultT::Ok(function(a, b)),
            (ResultT::Err(error), _) | (_, ResultT::Err(error)) => ResultT::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: ResultT<B, E>,
        third: ResultT<C, E>,
        function: F,
    ) -> ResultT<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (ResultT::Ok(a), ResultT::Ok(b), ResultT::Ok(c)) => ResultT::Ok(function(a, b, c)),
            (ResultT::Err(error), _, _)
            | (_, ResultT::Err(error), _)
            | (_, _, ResultT::Err(error)) => ResultT::Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: ResultT<B, E>) -> ResultT<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
