//! # nullshield
//!
//! Algebraic container types that make "no value" and "a failure value" part
//! of the static type.
//!
//! ## Overview
//!
//! - **[`OptionT`](container::OptionT)**: a value that is `Present` or `Absent`
//! - **[`ResultT`](container::ResultT)**: a value that is `Ok` or `Err`
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid and
//!   Bifunctor instances for both containers
//! - **Interop**: a fantasy-land encoding of the optional value
//!
//! Every operation is synchronous and pure. Closures handed to the
//! containers run at most once, inside the call that received them.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `fantasy-land`: The [`FlOption`](fantasy_land::FlOption) interop encoding
//! - `tracing`: Emit `tracing` debug events when a variant precondition is violated
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use nullshield::prelude::*;
//!
//! let port: OptionT<u16> = OptionT::of(None);
//! assert_eq!(port.unwrap_or(8080), 8080);
//!
//! let parsed: ResultT<u16, String> =
//!     ResultT::from("8080".parse::<u16>()).map_err(|error| error.to_string());
//! assert_eq!(parsed.get_ok(), OptionT::present(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types and, when enabled, the type classes and
/// the interop encoding.
///
/// # Usage
///
/// ```rust
/// use nullshield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "fantasy-land")]
    pub use crate::fantasy_land::*;
}

pub mod container;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "fantasy-land")]
pub mod fantasy_land;
