//! `ResultT` - a value that is either a success or a failure.
//!
//! `ResultT<T, E>` holds either a success value `Ok(T)` or a failure value
//! `Err(E)`. Unlike exceptions, the failure is part of the static type and
//! every caller has to deal with it, either by case analysis or by one of
//! the non-failing accessors.
//!
//! The success channel is a lawful functor, applicative and monad;
//! [`ResultT::map_err`] and [`ResultT::or_else`] are their duals over the
//! error channel.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::ResultT;
//!
//! fn parse(text: &str) -> ResultT<i32, String> {
//!     ResultT::from(text.parse::<i32>()).map_err(|error| error.to_string())
//! }
//!
//! let doubled = parse("21").flat_map(|x| ResultT::ok(x * 2));
//! assert_eq!(doubled.to_string(), "Ok( 42 )");
//!
//! let failed = parse("abc").map(|x| x * 2);
//! assert!(failed.is_err());
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

use std::fmt;

use super::error::{UnwrapError, unwrap_failure};
use super::option::OptionT;

const UNWRAP_ERR_MESSAGE: &str = "called `ResultT::unwrap()` on an `Err` value";
const UNWRAP_ERR_ON_OK_MESSAGE: &str = "called `ResultT::unwrap_err()` on an `Ok` value";

/// A value that is either `Ok(T)` or `Err(E)`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value; unconstrained
///
/// # Examples
///
/// ```rust
/// use nullshield::container::ResultT;
///
/// let success: ResultT<i32, &str> = ResultT::ok(1);
/// let failure: ResultT<i32, &str> = ResultT::err("e");
///
/// assert_eq!(success.get_ok().unwrap(), 1);
/// assert!(success.get_err().is_absent());
/// assert_eq!(failure.unwrap_or(9), 9);
/// assert_eq!(failure.expect_err("should fail"), "e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultT<T, E> {
    /// A success value.
    Ok(T),
    /// A failure value.
    Err(E),
}

impl<T, E> ResultT<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure value.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Channel Extraction
    // =========================================================================

    /// Returns the success value as an [`OptionT`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::{OptionT, ResultT};
    ///
    /// assert_eq!(ResultT::<i32, &str>::ok(1).get_ok(), OptionT::present(1));
    /// assert_eq!(ResultT::<i32, &str>::err("e").get_ok(), OptionT::absent());
    /// ```
    #[inline]
    pub fn get_ok(self) -> OptionT<T> {
        match self {
            Self::Ok(value) => OptionT::Present(value),
            Self::Err(_) => OptionT::Absent,
        }
    }

    /// Returns the failure value as an [`OptionT`].
    ///
    /// For any value exactly one of `get_ok` and `get_err` is `Present`.
    #[inline]
    pub fn get_err(self) -> OptionT<E> {
        match self {
            Self::Ok(_) => OptionT::Absent,
            Self::Err(error) => OptionT::Present(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a fixed message if the value is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let result = ResultT::<i32, &str>::ok(1).flat_map(|x| ResultT::ok(x * 2));
    /// assert_eq!(result.unwrap(), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self.try_expect_err(message) {
            Ok(error) => error,
            Err(unwrap_error) => panic!("{unwrap_error}"),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with a fixed message if the value is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(unwrap_error) => panic!("{unwrap_error}"),
        }
    }

    /// Non-panicking form of [`ResultT::expect`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if the value is `Err`.
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(unwrap_failure("ResultT::expect", message.to_owned())),
        }
    }

    /// Non-panicking form of [`ResultT::unwrap`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] with the default message if the value is `Err`.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(unwrap_failure("ResultT::unwrap", UNWRAP_ERR_MESSAGE)),
        }
    }

    /// Non-panicking form of [`ResultT::expect_err`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if the value is `Ok`.
    pub fn try_expect_err(self, message: &str) -> Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(unwrap_failure("ResultT::expect_err", message.to_owned())),
            Self::Err(error) => Ok(error),
        }
    }

    /// Non-panicking form of [`ResultT::unwrap_err`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] with the default message if the value is `Ok`.
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(unwrap_failure("ResultT::unwrap_err", UNWRAP_ERR_ON_OK_MESSAGE)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `function` runs only when the value is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let failure: ResultT<usize, &str> = ResultT::err("four");
    /// assert_eq!(failure.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value, passing an error through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> ResultT<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ResultT::Ok(function(value)),
            Self::Err(error) => ResultT::Err(error),
        }
    }

    /// Transforms the failure value, passing a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let failure: ResultT<i32, &str> = ResultT::err("bad");
    /// assert_eq!(failure.map_err(str::len), ResultT::err(3));
    ///
    /// let success: ResultT<i32, &str> = ResultT::ok(1);
    /// assert_eq!(success.map_err(str::len), ResultT::ok(1));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> ResultT<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => ResultT::Ok(value),
            Self::Err(error) => ResultT::Err(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default(error),
        }
    }

    // =========================================================================
    // Sequencing Operations
    // =========================================================================

    /// Chains a fallible computation on the success value.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> ResultT<U, E>
    where
        F: FnOnce(T) -> ResultT<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => ResultT::Err(error),
        }
    }

    /// Recovers from a failure with a computation on the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let retry = |error: &str| -> ResultT<i32, String> {
    ///     if error == "transient" {
    ///         ResultT::ok(0)
    ///     } else {
    ///         ResultT::err(format!("fatal: {error}"))
    ///     }
    /// };
    ///
    /// assert_eq!(ResultT::err("transient").or_else(retry), ResultT::ok(0));
    /// assert_eq!(ResultT::<i32, &str>::ok(1).or_else(retry), ResultT::ok(1));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> ResultT<T, G>
    where
        F: FnOnce(E) -> ResultT<T, G>,
    {
        match self {
            Self::Ok(value) => ResultT::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `other` if this value is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: ResultT<U, E>) -> ResultT<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => ResultT::Err(error),
        }
    }

    /// Returns this value if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<G>(self, other: ResultT<T, G>) -> ResultT<T, G> {
        match self {
            Self::Ok(value) => ResultT::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Applies a function held in `other` to the success value of `self`.
    ///
    /// The receiver is inspected first, so when both sides are `Err` the
    /// receiver's error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let value: ResultT<i32, &str> = ResultT::err("value");
    /// let function: ResultT<fn(i32) -> i32, &str> = ResultT::err("function");
    /// assert_eq!(value.ap(function), ResultT::err("value"));
    /// ```
    #[inline]
    pub fn ap<U, F>(self, other: ResultT<F, E>) -> ResultT<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| other.map(|function| function(value)))
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Runs `ok` on a success value or `err` on a failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullshield::container::ResultT;
    ///
    /// let result: ResultT<i32, &str> = ResultT::ok(1);
    /// let text = result.match_with(|n| format!("ok {n}"), |e| format!("err {e}"));
    /// assert_eq!(text, "ok 1");
    /// ```
    #[inline]
    pub fn match_with<U, O, R>(self, ok: O, err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the value is `Ok` and equal to `value`.
    ///
    /// Equality is `PartialEq` on the payload.
    #[inline]
    pub fn has_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Ok(contained) if contained == value)
    }

    /// Returns `true` if the value is `Ok` and satisfies `predicate`.
    #[inline]
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if both values have the same variant and equal payloads.
    ///
    /// Same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        self == other
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Borrows both channels.
    #[inline]
    pub const fn as_ref(&self) -> ResultT<&T, &E> {
        match self {
            Self::Ok(value) => ResultT::Ok(value),
            Self::Err(error) => ResultT::Err(error),
        }
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for ResultT<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok( {value} )"),
            Self::Err(error) => write!(formatter, "Err( {error} )"),
        }
    }
}

impl<T, E> From<Result<T, E>> for ResultT<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<ResultT<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: ResultT<T, E>) -> Self {
        match result {
            ResultT::Ok(value) => Ok(value),
            ResultT::Err(error) => Err(error),
        }
    }
}
