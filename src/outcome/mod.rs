//! The two outcome containers.
//!
//! - [`Outcome`] - a success value or any [`ErrorLike`](crate::ErrorLike), boxed
//! - [`TypedOutcome`] - a success value or an error of a closed, caller-chosen type
//!
//! Both share [`OperationStatus`](crate::OperationStatus) as their discriminant
//! and the same construction and destructuring surface. They are independent
//! types; neither is built from the other.
//!
//! # Examples
//!
//! ```
//! use outcome::{Error, Outcome, TypedOutcome};
//!
//! let open: Outcome<u8> = Error::new("out of range").into();
//! assert!(open.is_failed());
//!
//! let closed: TypedOutcome<u8, ()> = TypedOutcome::Success(1);
//! assert!(closed.is_success());
//! ```
pub mod open;
pub mod typed;

pub use self::open::*;
pub use self::typed::*;
