//! Core traits for describing failures.
//!
//! - [`ErrorLike`]: the capability every error held by an [`Outcome`](crate::Outcome) has
//! - [`ErrorBase`]: named errors whose message is fixed by their type
//!
//! # Examples
//!
//! ```
//! use outcome::traits::ErrorLike;
//! use outcome::Error;
//!
//! let error: &dyn ErrorLike = &Error::new("boom");
//! assert_eq!(error.message(), "boom");
//! assert_eq!(error.to_string(), "boom");
//! ```

pub mod error_like;

pub use error_like::{ErrorBase, ErrorLike};
