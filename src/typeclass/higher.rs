//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `OptionT<_>` as a type constructor directly. The
//! [`TypeConstructor`] trait works around this with a generic associated
//! type, which lets [`Functor`](super::Functor), [`Applicative`](super::Applicative)
//! and [`Monad`](super::Monad) name "the same container holding a different
//! type".
//!
//! # Example
//!
//! ```rust
//! use nullshield::container::OptionT;
//! use nullshield::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: OptionT<String> = emptied(OptionT::present(42));
//! assert_eq!(emptied, OptionT::absent());
//! ```

use crate::container::{OptionT, ResultT};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `OptionT<i32>` this is `i32`; for `ResultT<i32, E>` it is the
    /// success type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// `ResultT<T, E>::WithType<B>` keeps the error type: `ResultT<B, E>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for OptionT<T> {
    type Inner = T;
    type WithType<B> = OptionT<B>;
}

impl<T, E> TypeConstructor for ResultT<T, E> {
    type Inner = T;
    type WithType<B> = ResultT<B, E>;
}
