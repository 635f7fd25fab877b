//! Interop adapter for the fantasy-land algebra convention.
//!
//! Libraries following the convention expect their own two-variant encoding
//! of an optional value. This module provides that encoding, [`FlOption`],
//! and lossless conversions to and from [`OptionT`]:
//!
//! ```text
//! OptionT::Present(v)  <->  FlOption::Some(v)
//! OptionT::Absent      <->  FlOption::None
//! ```
//!
//! The container types do not depend on this module; it is compiled only
//! with the `fantasy-land` feature.
//!
//! [`OptionT`]: crate::container::OptionT

mod option;

pub use option::FlOption;
