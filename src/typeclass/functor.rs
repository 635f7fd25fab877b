//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value while keeping
//! its structure: a `Present` stays `Present`, an `Err` stays the same `Err`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::Functor;
//!
//! let value: OptionT<i32> = OptionT::present(5);
//! assert_eq!(value.fmap(|n| n.to_string()), OptionT::present("5".to_string()));
//!
//! let absent: OptionT<i32> = OptionT::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), OptionT::absent());
//! ```

use super::higher::TypeConstructor;
use crate::container::{OptionT, ResultT};

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    /// use nullshield::typeclass::Functor;
    ///
    /// let value: ResultT<i32, String> = ResultT::ok(5);
    /// assert_eq!(value.fmap(|n| n * 2), ResultT::ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    /// use nullshield::typeclass::Functor;
    ///
    /// let text = OptionT::present("hello".to_string());
    /// assert_eq!(text.fmap_ref(|s| s.len()), OptionT::present(5));
    /// assert!(text.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// OptionT<T> Implementation
// =============================================================================

impl<T> Functor for OptionT<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> OptionT<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> OptionT<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// ResultT<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for ResultT<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ResultT<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> ResultT<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            ResultT::Ok(value) => ResultT::Ok(function(value)),
            ResultT::Err(error) => ResultT::Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let value = OptionT::present("hello".to_string());
        assert_eq!(value.fmap_ref(String::len), OptionT::present(5));
        assert_eq!(value, OptionT::present("hello".to_string()));
    }

    #[rstest]
    #[case(OptionT::present(5), OptionT::present("replaced"))]
    #[case(OptionT::absent(), OptionT::absent())]
    fn option_replace(#[case] value: OptionT<i32>, #[case] expected: OptionT<&str>) {
        assert_eq!(value.replace("replaced"), expected);
    }

    #[rstest]
    fn option_void() {
        assert_eq!(OptionT::present(5).void(), OptionT::present(()));
        assert_eq!(OptionT::<i32>::absent().void(), OptionT::absent());
    }

    #[rstest]
    fn result_fmap_ref_clones_error() {
        let failure: ResultT<i32, String> = ResultT::err("bad".to_string());
        assert_eq!(failure.fmap_ref(|n| n + 1), ResultT::err("bad".to_string()));
        assert!(failure.is_err());
    }

    #[rstest]
    fn result_replace_keeps_error() {
        let failure: ResultT<i32, &str> = ResultT::err("bad");
        assert_eq!(failure.replace(true), ResultT::err("bad"));
    }
}
