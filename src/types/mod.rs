//! Error values and the operation status tag.
//!
//! # Examples
//!
//! ```
//! use outcome::{Error, OperationStatus};
//!
//! let err = Error::new("database connection failed");
//! assert_eq!(err.to_string(), "database connection failed");
//! assert!(OperationStatus::Failed.is_failed());
//! ```

pub mod alloc_type;
pub mod error;
pub mod parts_error;
pub mod status;

pub use error::*;
pub use parts_error::*;
pub use status::*;
