//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome::prelude::*;
//!
//! error_base! {
//!     struct UserNotFound => "user not found";
//! }
//!
//! fn find(name: &str) -> Outcome<String> {
//!     if name.is_empty() {
//!         return UserNotFound.into();
//!     }
//!     Outcome::from_value(name.to_string())
//! }
//!
//! assert_eq!(find("").status(), OperationStatus::Failed);
//! ```

// Macros
pub use crate::{error_base, failure};

// Core types
pub use crate::outcome::{Outcome, TypedOutcome};
pub use crate::types::{Error, OperationStatus, PartsError};

// Traits
pub use crate::traits::{ErrorBase, ErrorLike};

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
