//! Type class traits for the container types.
//!
//! The inherent methods of [`OptionT`] and [`ResultT`] already cover their
//! full operator surface. This module exposes the same behaviour through
//! generic traits so that code can be written once for any container:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying wrapped functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Bifunctor`]: Mapping over both channels of [`ResultT`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The
//! [`TypeConstructor`] trait emulates them with Generic Associated Types.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::{OptionT, ResultT};
//! use nullshield::typeclass::{Applicative, Functor};
//!
//! fn add_one<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
//!     container.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(add_one(OptionT::present(1)), OptionT::present(2));
//! assert_eq!(add_one(ResultT::<i32, String>::ok(1)), ResultT::ok(2));
//!
//! let lifted: ResultT<i32, String> = <ResultT<(), String>>::pure(7);
//! assert_eq!(lifted, ResultT::ok(7));
//! ```
//!
//! [`OptionT`]: crate::container::OptionT
//! [`ResultT`]: crate::container::ResultT

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
