use core::any::Any;
use core::fmt::{self, Debug, Display};

/// The minimal contract every failure reason held by an [`Outcome`](crate::Outcome) satisfies.
///
/// An implementor only has to report a human-readable message. The bound on
/// [`Any`] lets callers recover the concrete type behind a `dyn ErrorLike`
/// through [`is`](#method.is) and [`downcast_ref`](#method.downcast_ref).
///
/// # Examples
///
/// ```
/// use outcome::{ErrorLike, Outcome};
///
/// #[derive(Debug)]
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl ErrorLike for QuotaExceeded {
///     fn message(&self) -> &str {
///         "quota exceeded"
///     }
/// }
///
/// let outcome: Outcome<u32> = Outcome::from_error(QuotaExceeded { limit: 10 });
/// let error = outcome.error().unwrap();
/// assert_eq!(error.message(), "quota exceeded");
/// assert_eq!(error.downcast_ref::<QuotaExceeded>().unwrap().limit, 10);
/// ```
pub trait ErrorLike: Any + Debug + Send + Sync {
    /// A useful message describing the error.
    fn message(&self) -> &str;
}

impl dyn ErrorLike {
    /// Returns `true` if the boxed error is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: ErrorLike>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Returns a reference to the concrete error if it is of type `T`.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T: ErrorLike>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl Display for dyn ErrorLike + '_ {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Named errors whose message is fixed by their type.
///
/// This is the building block for error types such as "user not found" that
/// always say the same thing. Every `ErrorBase` is an [`ErrorLike`] whose
/// message is [`MESSAGE`](ErrorBase::MESSAGE). The message belongs to the type,
/// so a value can never carry a different one.
///
/// Every `ErrorBase` converts into a failed [`Outcome`](crate::Outcome).
/// `Display` must render exactly [`MESSAGE`](ErrorBase::MESSAGE).
/// [`error_base!`](crate::error_base) writes that impl for you and is the
/// preferred way to declare these.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use outcome::{ErrorBase, ErrorLike, Outcome};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl ErrorBase for Timeout {
///     const MESSAGE: &'static str = "operation timed out";
/// }
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(Self::MESSAGE)
///     }
/// }
///
/// assert_eq!(Timeout.message(), "operation timed out");
/// assert_eq!(Timeout.to_string(), "operation timed out");
///
/// let outcome: Outcome<u8> = Timeout.into();
/// assert_eq!(outcome.message(), Some("operation timed out"));
/// ```
pub trait ErrorBase: Debug + Display + Send + Sync + 'static {
    /// The message reported by every value of this type.
    const MESSAGE: &'static str;
}

impl<T: ErrorBase> ErrorLike for T {
    #[inline]
    fn message(&self) -> &str {
        T::MESSAGE
    }
}
