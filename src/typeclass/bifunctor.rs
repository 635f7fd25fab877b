//! Bifunctor type class - mapping over both channels of `ResultT`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order
//!
//! `ResultT<T, E>` is implemented as `Bifunctor<E, T>`:
//! - `first`: transforms the error type, equivalent to [`ResultT::map_err`]
//! - `second`: transforms the success type, equivalent to [`ResultT::map`]
//!
//! This keeps `second` consistent with `Functor::fmap`.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::ResultT;
//! use nullshield::typeclass::Bifunctor;
//!
//! let failure: ResultT<i32, String> = ResultT::err("bad".to_string());
//! assert_eq!(failure.bimap(|e| e.len(), |x| x * 2), ResultT::err(3));
//!
//! let success: ResultT<i32, String> = ResultT::ok(21);
//! assert_eq!(success.bimap(|e| e.len(), |x| x * 2), ResultT::ok(42));
//! ```

use crate::container::ResultT;

/// A type class for types with two mappable type parameters.
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps both type parameters at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first type parameter.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second type parameter.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

// =============================================================================
// ResultT<T, E> Implementation
// =============================================================================

impl<T, E> Bifunctor<E, T> for ResultT<T, E> {
    type Target<C, D> = ResultT<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> ResultT<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Ok(value) => ResultT::Ok(second_function(value)),
            Self::Err(error) => ResultT::Err(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_matches_map_err() {
        let failure: ResultT<i32, &str> = ResultT::err("bad");
        assert_eq!(failure.first(str::len), failure.map_err(str::len));
    }

    #[rstest]
    fn second_matches_map() {
        let success: ResultT<i32, &str> = ResultT::ok(2);
        assert_eq!(success.second(|x| x + 1), success.map(|x| x + 1));
    }

    #[rstest]
    fn first_then_second_equals_bimap() {
        let success: ResultT<i32, &str> = ResultT::ok(2);
        let sequential = success.first(str::len).second(|x| x * 10);
        assert_eq!(sequential, success.bimap(str::len, |x| x * 10));
    }
}
