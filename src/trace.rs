//! Tracing integration for outcomes.
//!
//! This module lets an outcome report itself to the `tracing` ecosystem as it
//! passes through a call site, without changing it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::{OperationStatus, Outcome, TypedOutcome};

/// Extension trait that records an outcome as a `tracing` event.
///
/// Successes are recorded at `DEBUG`, failures at `WARN` with the error
/// message attached. The outcome is returned untouched, so the call can sit in
/// the middle of a return expression.
///
/// # Examples
///
/// ```
/// use outcome::trace::OutcomeTraceExt;
/// use outcome::{Error, Outcome};
///
/// fn load(id: u32) -> Outcome<u32> {
///     let outcome: Outcome<u32> = if id == 0 {
///         Error::new("unknown id").into()
///     } else {
///         Outcome::from_value(id)
///     };
///     outcome.trace_outcome("load")
/// }
///
/// assert!(load(0).is_failed());
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits an event describing this outcome under the given operation name.
    #[must_use]
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<V> OutcomeTraceExt for Outcome<V> {
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(_) => {
                tracing::debug!(operation, status = %OperationStatus::Success, "operation succeeded");
            },
            Outcome::Failed(error) => {
                tracing::warn!(
                    operation,
                    status = %OperationStatus::Failed,
                    error = error.message(),
                    "operation failed"
                );
            },
        }
        self
    }
}

impl<V, E: Display> OutcomeTraceExt for TypedOutcome<V, E> {
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            TypedOutcome::Success(_) => {
                tracing::debug!(operation, status = %OperationStatus::Success, "operation succeeded");
            },
            TypedOutcome::Failed(error) => {
                tracing::warn!(
                    operation,
                    status = %OperationStatus::Failed,
                    error = %error,
                    "operation failed"
                );
            },
        }
        self
    }
}
