//! Error types for the container types.
//!
//! Two kinds of failure can occur when working with [`OptionT`] and
//! [`ResultT`]:
//!
//! - [`ConstructionError`]: a checked variant constructor received a payload
//!   that contradicts the variant it builds.
//! - [`UnwrapError`]: an accessor that assumes one variant was called on the
//!   other one.
//!
//! Neither error is recovered internally. They are returned to the immediate
//! caller (or, for the panicking accessors, raised as a panic carrying the
//! same message).
//!
//! [`OptionT`]: super::OptionT
//! [`ResultT`]: super::ResultT

use std::borrow::Cow;

use thiserror::Error;

/// Raised when a checked constructor receives a payload inconsistent with
/// the variant it is asked to build.
///
/// # Examples
///
/// ```rust
/// use nullshield::container::{ConstructionError, OptionT};
///
/// let error = OptionT::<i32>::try_present(None).unwrap_err();
/// assert_eq!(error, ConstructionError::PresentWithoutValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConstructionError {
    /// A `Present` value was requested without a payload.
    #[error("cannot construct a `Present` value from an absent payload")]
    PresentWithoutValue,
    /// An `Absent` value was requested with a payload.
    #[error("cannot construct an `Absent` value from a present payload")]
    AbsentWithValue,
}

/// Raised when `unwrap`, `expect`, `unwrap_err` or `expect_err` is called on
/// the wrong variant.
///
/// The message is the one supplied to `expect`/`expect_err`, or a fixed
/// default for `unwrap`/`unwrap_err`.
///
/// # Examples
///
/// ```rust
/// use nullshield::container::OptionT;
///
/// let error = OptionT::<i32>::absent().try_expect("need a value").unwrap_err();
/// assert_eq!(error.message(), "need a value");
/// assert_eq!(error.to_string(), "need a value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: Cow<'static, str>,
}

impl UnwrapError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its message.
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

// =============================================================================
// Failure Reporting
// =============================================================================

/// Builds the [`UnwrapError`] for a failed accessor.
///
/// With the `tracing` feature enabled a debug event is emitted before the
/// error is handed back.
#[cold]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn unwrap_failure(
    operation: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> UnwrapError {
    let error = UnwrapError::new(message);
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, message = %error, "variant precondition violated");
    error
}

/// Reports a [`ConstructionError`] the same way [`unwrap_failure`] does.
#[cold]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn construction_failure(
    operation: &'static str,
    error: ConstructionError,
) -> ConstructionError {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, error = %error, "variant constructor rejected payload");
    error
}
