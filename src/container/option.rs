//! `OptionT` - a value that is either present or absent.
//!
//! This module provides the `OptionT<T>` type, which makes "no value" part of
//! the static type instead of a sentinel. It is commonly used for:
//!
//! - Lookups that may find nothing
//! - Optional configuration and fields
//! - Replacing nullable inputs at API boundaries
//!
//! `OptionT` is a lawful functor, applicative and monad, and forms a monoid
//! under [`OptionT::or`] with [`OptionT::Absent`] as the identity.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::OptionT;
//!
//! // The smart constructor treats `None` as the nullish input
//! let present: OptionT<i32> = OptionT::of(1);
//! let absent: OptionT<i32> = OptionT::of(None);
//!
//! assert!(present.is_present());
//! assert!(absent.is_absent());
//!
//! // Transform without unpacking
//! let doubled = present.map(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 2);
//!
//! // Collapse to a plain value
//! assert_eq!(absent.unwrap_or(2), 2);
//! ```

use std::fmt;

use super::error::{ConstructionError, UnwrapError, construction_failure, unwrap_failure};
use super::result::ResultT;

const UNWRAP_ABSENT_MESSAGE: &str = "called `OptionT::unwrap()` on an `Absent` value";

/// A value that is either `Present(T)` or `Absent`.
///
/// Exactly one variant is active and the variant never changes after
/// construction: every operation returns a new value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use nullshield::container::OptionT;
///
/// fn halve(value: i32) -> OptionT<i32> {
///     if value % 2 == 0 {
///         OptionT::present(value / 2)
///     } else {
///         OptionT::absent()
///     }
/// }
///
/// assert_eq!(OptionT::present(8).flat_map(halve).flat_map(halve), OptionT::present(2));
/// assert_eq!(OptionT::present(6).flat_map(halve).flat_map(halve), OptionT::absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionT<T> {
    /// A contained value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> OptionT<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `OptionT` from a possibly-absent input.
    ///
    /// `None` becomes `Absent`; anything else becomes `Present`. Bare values
    /// are accepted as well, since `T: Into<Option<T>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::<i32>::of(5), OptionT::Present(5));
    /// assert_eq!(OptionT::<i32>::of(Some(5)), OptionT::Present(5));
    /// assert_eq!(OptionT::<i32>::of(None), OptionT::Absent);
    /// ```
    #[inline]
    pub fn of(value: impl Into<Option<T>>) -> Self {
        Self::from(value.into())
    }

    /// Creates a `Present` value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an `Absent` value.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Creates a `Present` value from a payload only known at run time.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::PresentWithoutValue`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::{ConstructionError, OptionT};
    ///
    /// assert_eq!(OptionT::try_present(Some(1)), Ok(OptionT::Present(1)));
    /// assert_eq!(
    ///     OptionT::<i32>::try_present(None),
    ///     Err(ConstructionError::PresentWithoutValue)
    /// );
    /// ```
    pub fn try_present(value: Option<T>) -> Result<Self, ConstructionError> {
        match value {
            Some(value) => Ok(Self::Present(value)),
            None => Err(construction_failure(
                "OptionT::try_present",
                ConstructionError::PresentWithoutValue,
            )),
        }
    }

    /// Creates an `Absent` value, rejecting any payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::AbsentWithValue`] if `value` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::{ConstructionError, OptionT};
    ///
    /// assert_eq!(OptionT::<i32>::try_absent(None), Ok(OptionT::Absent));
    /// assert_eq!(
    ///     OptionT::try_absent(Some("value")),
    ///     Err(ConstructionError::AbsentWithValue)
    /// );
    /// ```
    pub fn try_absent(value: Option<T>) -> Result<Self, ConstructionError> {
        match value {
            Some(_) => Err(construction_failure(
                "OptionT::try_absent",
                ConstructionError::AbsentWithValue,
            )),
            None => Ok(Self::Absent),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert!(OptionT::present(1).is_present());
    /// assert!(!OptionT::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is an `Absent` value.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present("value").expect("value should be present"), "value");
    /// ```
    ///
    /// ```should_panic
    /// use nullshield::container::OptionT;
    ///
    /// OptionT::<i32>::absent().expect("value should be present");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with a fixed message if the value is `Absent`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if the value is `Absent`.
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(unwrap_failure("OptionT::expect", message.to_owned())),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] with the default
    /// message.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::{OptionT, UnwrapError};
    ///
    /// fn first_even(values: &[i32]) -> Result<i32, UnwrapError> {
    ///     let found = OptionT::from(values.iter().copied().find(|value| value % 2 == 0));
    ///     found.try_unwrap()
    /// }
    ///
    /// assert_eq!(first_even(&[1, 4, 6]), Ok(4));
    /// assert!(first_even(&[1, 3]).is_err());
    /// ```
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(unwrap_failure("OptionT::unwrap", UNWRAP_ABSENT_MESSAGE)),
        }
    }

    /// Returns the contained value or `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present(1).unwrap_or(2), 1);
    /// assert_eq!(OptionT::absent().unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the contained value or computes one from `thunk`.
    ///
    /// `thunk` runs only when the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(OptionT::absent().unwrap_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, thunk: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => thunk(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present(1).map(|x| x * 2), OptionT::present(2));
    /// assert_eq!(OptionT::<i32>::absent().map(|x| x * 2), OptionT::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> OptionT<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => OptionT::Present(function(value)),
            Self::Absent => OptionT::Absent,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present("foo").map_or(0, str::len), 3);
    /// assert_eq!(OptionT::<&str>::absent().map_or(0, str::len), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the contained value, or computes a default.
    ///
    /// Exactly one of the two closures runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Sequencing Operations
    // =========================================================================

    /// Returns `other` if this value is `Present`, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present(1).and(OptionT::present("a")), OptionT::present("a"));
    /// assert_eq!(OptionT::<i32>::absent().and(OptionT::present("a")), OptionT::absent());
    /// ```
    #[inline]
    pub fn and<U>(self, other: OptionT<U>) -> OptionT<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => OptionT::Absent,
        }
    }

    /// Chains a computation that itself may produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// let parse = |text: &str| OptionT::from(text.parse::<i32>().ok());
    ///
    /// assert_eq!(OptionT::present("42").flat_map(parse), OptionT::present(42));
    /// assert_eq!(OptionT::present("x").flat_map(parse), OptionT::absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> OptionT<U>
    where
        F: FnOnce(T) -> OptionT<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => OptionT::Absent,
        }
    }

    /// Applies a function held in `other` to the value held in `self`.
    ///
    /// The receiver is inspected first; `other` is only consulted when the
    /// receiver is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// let double = OptionT::present(|x: i32| x * 2);
    /// assert_eq!(OptionT::present(1).ap(double), OptionT::present(2));
    ///
    /// let missing: OptionT<fn(i32) -> i32> = OptionT::absent();
    /// assert_eq!(OptionT::present(1).ap(missing), OptionT::absent());
    /// ```
    #[inline]
    pub fn ap<U, F>(self, other: OptionT<F>) -> OptionT<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| other.map(|function| function(value)))
    }

    /// Returns `self` if it is `Present`, otherwise `other`.
    ///
    /// `or` is associative and `Absent` is its identity on both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// assert_eq!(OptionT::present(1).or(OptionT::present(2)), OptionT::present(1));
    /// assert_eq!(OptionT::absent().or(OptionT::present(2)), OptionT::present(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent => other,
        }
    }

    /// Returns `self` if it is `Present`, otherwise the result of `thunk`.
    #[inline]
    pub fn or_else<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent => thunk(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self
            && predicate(&value)
        {
            return Self::Present(value);
        }
        Self::Absent
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Runs `present` on the contained value or `absent` on its absence.
    ///
    /// Both handlers must produce the same type, so every case is covered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::OptionT;
    ///
    /// let describe = |value: OptionT<i32>| {
    ///     value.match_with(|n| format!("got {n}"), || "nothing".to_string())
    /// };
    ///
    /// assert_eq!(describe(OptionT::present(3)), "got 3");
    /// assert_eq!(describe(OptionT::absent()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<U, P, A>(self, present: P, absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => present(value),
            Self::Absent => absent(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the value is `Present` and equal to `value`.
    #[inline]
    pub fn has_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Present(contained) if contained == value)
    }

    /// Returns `true` if the value is `Present` and satisfies `predicate`.
    #[inline]
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> OptionT<&T> {
        match self {
            Self::Present(value) => OptionT::Present(value),
            Self::Absent => OptionT::Absent,
        }
    }

    /// Converts into a [`ResultT`], using `error` for the `Absent` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::{OptionT, ResultT};
    ///
    /// assert_eq!(OptionT::present(1).ok_or("missing"), ResultT::Ok(1));
    /// assert_eq!(OptionT::<i32>::absent().ok_or("missing"), ResultT::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> ResultT<T, E> {
        match self {
            Self::Present(value) => ResultT::Ok(value),
            Self::Absent => ResultT::Err(error),
        }
    }

    /// Converts into a [`ResultT`], computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> ResultT<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => ResultT::Ok(value),
            Self::Absent => ResultT::Err(error()),
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OptionT<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for OptionT<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present( {value} )"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for OptionT<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<OptionT<T>> for Option<T> {
    #[inline]
    fn from(value: OptionT<T>) -> Self {
        match value {
            OptionT::Present(value) => Some(value),
            OptionT::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(1), true)]
    #[case(None, false)]
    fn of_selects_variant(#[case] input: Option<i32>, #[case] present: bool) {
        let value = OptionT::<i32>::of(input);
        assert_eq!(value.is_present(), present);
        assert_eq!(value.is_absent(), !present);
    }

    #[rstest]
    fn of_accepts_bare_value() {
        assert_eq!(OptionT::<&str>::of("foo"), OptionT::Present("foo"));
    }

    #[rstest]
    fn unwrap_or_else_skips_thunk_when_present() {
        let calls = Cell::new(0);
        let value = OptionT::present(1).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_or_else_runs_default_once_when_absent() {
        let calls = Cell::new(0);
        let value = OptionT::<i32>::absent().map_or_else(
            || {
                calls.set(calls.get() + 1);
                0
            },
            |x| x + 1,
        );
        assert_eq!(value, 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn try_unwrap_reports_default_message() {
        let error = OptionT::<i32>::absent().try_unwrap().unwrap_err();
        assert_eq!(error.message(), UNWRAP_ABSENT_MESSAGE);
    }

    #[rstest]
    #[should_panic(expected = "called `OptionT::unwrap()` on an `Absent` value")]
    fn unwrap_panics_on_absent() {
        OptionT::<i32>::absent().unwrap();
    }

    #[rstest]
    #[should_panic(expected = "custom message")]
    fn expect_panics_with_message() {
        OptionT::<i32>::absent().expect("custom message");
    }

    #[rstest]
    fn filter_keeps_matching_value() {
        assert_eq!(OptionT::present(4).filter(|x| x % 2 == 0), OptionT::present(4));
        assert_eq!(OptionT::present(3).filter(|x| x % 2 == 0), OptionT::absent());
    }

    #[rstest]
    fn queries_inspect_without_consuming() {
        let value = OptionT::present(String::from("abc"));
        assert!(value.has_value(&String::from("abc")));
        assert!(value.contains(|s| s.len() == 3));
        assert!(!OptionT::<String>::absent().contains(|_| true));
        assert_eq!(value.as_ref().map(String::len), OptionT::present(3));
    }

    #[rstest]
    #[case(OptionT::present(1), "Present( 1 )")]
    #[case(OptionT::absent(), "Absent")]
    fn display_renders_variant(#[case] value: OptionT<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn std_option_conversion_roundtrip() {
        let present: Option<i32> = OptionT::present(1).into_option();
        assert_eq!(present, Some(1));
        assert_eq!(OptionT::from(present), OptionT::present(1));
        assert_eq!(Option::<i32>::from(OptionT::absent()), None);
    }

    #[rstest]
    fn default_is_absent() {
        assert_eq!(OptionT::<i32>::default(), OptionT::Absent);
    }
}
