use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a pair of optional parts could not be reassembled into an outcome.
///
/// Returned by [`Outcome::from_parts`](crate::Outcome::from_parts) and
/// [`TypedOutcome::from_parts`](crate::TypedOutcome::from_parts). Exactly one
/// of the two parts must be present.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PartsError {
    /// Neither a value nor an error was supplied.
    MissingBoth,
    /// Both a value and an error were supplied.
    BothPresent,
}

impl Display for PartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBoth => f.write_str("outcome requires a value or an error, found neither"),
            Self::BothPresent => f.write_str("outcome cannot hold both a value and an error"),
        }
    }
}

impl core::error::Error for PartsError {}
