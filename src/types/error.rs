use crate::traits::ErrorLike;
use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ready-made [`ErrorLike`] carrying nothing but its message.
///
/// Use it directly when a failure needs a message and no dedicated type.
/// For named errors with a fixed message, see [`error_base!`](crate::error_base).
///
/// Equality, ordering and hashing all follow the message, and `Display`
/// prints the message with no decoration.
///
/// # Examples
///
/// ```
/// use outcome::Error;
///
/// let error = Error::new("user already exists");
/// assert_eq!(error.message(), "user already exists");
/// assert_eq!(error.to_string(), "user already exists");
/// assert_eq!(error, Error::from("user already exists"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Error {
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error from a static or owned message.
    ///
    /// # Arguments
    ///
    /// * `message` - A useful message describing the error
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into() }
    }

    /// Returns the message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the message.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl ErrorLike for Error {
    #[inline]
    fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Error {}

impl From<&'static str> for Error {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
