//! The optional-value and disjoint-result container types.
//!
//! This module provides:
//!
//! - [`OptionT`]: a value that is either `Present` or `Absent`
//! - [`ResultT`]: a value that is either `Ok` or `Err`
//! - [`ConstructionError`] and [`UnwrapError`]: the two ways a caller can
//!   violate a variant precondition
//!
//! Both containers are immutable values. Every operation either inspects the
//! active variant or builds a new container; nothing is mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use nullshield::container::{OptionT, ResultT};
//!
//! let config_port: OptionT<u16> = OptionT::of(None);
//! let port = config_port.or(OptionT::present(8080)).unwrap();
//! assert_eq!(port, 8080);
//!
//! let checked: ResultT<u16, String> = OptionT::present(port)
//!     .filter(|port| *port >= 1024)
//!     .ok_or_else(|| "privileged port".to_string());
//! assert!(checked.is_ok());
//! ```

mod error;
mod option;
mod result;

pub use error::{ConstructionError, UnwrapError};
pub use option::OptionT;
pub use result::ResultT;

// Thread-safety follows the payload types.
static_assertions::assert_impl_all!(OptionT<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(ResultT<String, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OptionT<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(ResultT<i32, std::cell::Cell<i32>>: Sync);
