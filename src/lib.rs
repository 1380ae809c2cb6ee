//! A tagged outcome type: either the value an operation produced or the reason
//! it failed, never both.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome::*` or pick focused pieces as needed.
//!
//! - [`Outcome<V>`](Outcome) holds any [`ErrorLike`] failure, boxed
//! - [`TypedOutcome<V, E>`](TypedOutcome) holds a failure of a closed type `E`
//! - [`Error`] and [`error_base!`] provide ready-made failures
//!
//! Expected failures travel as data through ordinary return values. Inspect
//! them through the [`OperationStatus`] tag, the `is_success` / `is_failed`
//! predicates, or by destructuring.
//!
//! # Examples
//!
//! ## Open outcome
//!
//! ```
//! use outcome::{Error, Outcome};
//!
//! fn create_user(name: &str, existing: &[&str]) -> Outcome<String> {
//!     if existing.contains(&name) {
//!         return Error::new("user already exists").into();
//!     }
//!     Outcome::from_value(name.to_string())
//! }
//!
//! let outcome = create_user("John123", &[]);
//! assert!(outcome.is_success());
//! assert_eq!(outcome.value().map(String::as_str), Some("John123"));
//!
//! let outcome = create_user("John123", &["John123"]);
//! assert!(outcome.is_failed());
//! assert_eq!(outcome.message(), Some("user already exists"));
//! ```
//!
//! ## Closed outcome
//!
//! ```
//! use outcome::{OperationStatus, TypedOutcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum EditUserError {
//!     NotFound,
//! }
//!
//! let outcome: TypedOutcome<String, EditUserError> = TypedOutcome::Failed(EditUserError::NotFound);
//! let (status, user, error) = outcome.into_status_parts();
//! assert_eq!(status, OperationStatus::Failed);
//! assert_eq!(user, None);
//! assert_eq!(error, Some(EditUserError::NotFound));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Outcome` and `TypedOutcome`
pub mod convert;
/// Macros for named errors and formatted failures
pub mod macros;
/// The `Outcome` and `TypedOutcome` containers
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits describing failures
pub mod traits;
/// Error values and the operation status tag
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use convert::*;
pub use outcome::{Outcome, TypedOutcome};
pub use traits::{ErrorBase, ErrorLike};
pub use types::{Error, OperationStatus, PartsError};
