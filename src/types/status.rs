use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The finishing status of an operation.
///
/// This is the discriminant shared by [`Outcome`](crate::Outcome) and
/// [`TypedOutcome`](crate::TypedOutcome). It carries no payload and is set once,
/// when the outcome is built.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, OperationStatus};
///
/// let outcome = Outcome::from_value(7);
/// assert_eq!(outcome.status(), OperationStatus::Success);
/// assert_eq!(OperationStatus::Failed.to_string(), "failed");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum OperationStatus {
    /// The operation completed successfully.
    Success,
    /// The operation failed to complete.
    Failed,
}

impl OperationStatus {
    /// Returns `true` for [`OperationStatus::Success`].
    #[must_use]
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for [`OperationStatus::Failed`].
    #[must_use]
    #[inline]
    pub const fn is_failed(self) -> bool {
        !self.is_success()
    }

    /// Lowercase name of the status, as rendered by `Display`.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl Display for OperationStatus {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
