//! Macros for declaring named errors and returning failures.
//!
//! - [`macro@crate::error_base`] - Declares unit structs that carry a fixed message
//!   and plug into [`Outcome`](crate::Outcome) like any other [`ErrorLike`](crate::ErrorLike).
//! - [`macro@crate::failure`] - Formats a message into an [`Error`](crate::Error)
//!   and wraps it in a failed [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome::{error_base, failure, Outcome};
//!
//! error_base! {
//!     /// Raised when the requested user does not exist.
//!     pub struct UserNotFound => "user not found";
//! }
//!
//! fn get_user(id: u32) -> Outcome<&'static str> {
//!     match id {
//!         0 => UserNotFound.into(),
//!         1 => Outcome::from_value("John123"),
//!         other => failure!("user id {} is reserved", other),
//!     }
//! }
//!
//! assert_eq!(get_user(0).message(), Some("user not found"));
//! assert!(get_user(0).error().unwrap().is::<UserNotFound>());
//! assert_eq!(get_user(7).message(), Some("user id 7 is reserved"));
//! ```

/// Declares one or more named errors, each with a fixed message.
///
/// Every declaration expands to a unit struct that:
///
/// - implements [`ErrorBase`](crate::ErrorBase), and through it
///   [`ErrorLike`](crate::ErrorLike), reporting the given message
/// - implements `Display` (exactly the message) and `core::error::Error`
/// - converts into a failed [`Outcome<V>`](crate::Outcome) for any `V`, like every `ErrorBase`
/// - derives `Clone`, `Copy`, `Debug`, `Default`, `PartialEq`, `Eq`, `Hash`
///
/// The expansion owns the `Display` impl, so the rendered text of a named
/// error is always its message.
///
/// # Syntax
///
/// ```text
/// error_base! {
///     $(#[attr])* $vis struct $Name => $message;
///     ...
/// }
/// ```
///
/// # Examples
///
/// ```
/// use outcome::{error_base, ErrorLike, Outcome};
///
/// error_base! {
///     pub struct AlreadyExists => "user already exists";
///     pub(crate) struct Locked => "account locked";
/// }
///
/// assert_eq!(AlreadyExists.to_string(), "user already exists");
/// assert_eq!(Locked.message(), "account locked");
///
/// let outcome: Outcome<()> = Locked.into();
/// assert!(outcome.is_failed());
/// ```
#[macro_export]
macro_rules! error_base {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident => $message:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis struct $name;

            impl $crate::ErrorBase for $name {
                const MESSAGE: &'static str = $message;
            }

            impl ::core::fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(<Self as $crate::ErrorBase>::MESSAGE)
                }
            }

            impl ::core::error::Error for $name {}
        )+
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) from a formatted message.
///
/// Accepts the same arguments as the standard `format!` macro. The message is
/// stored in an [`Error`](crate::Error).
///
/// # Examples
///
/// ```
/// use outcome::{failure, Outcome};
///
/// fn reserve(seat: u32) -> Outcome<u32> {
///     if seat > 40 {
///         return failure!("seat {} does not exist", seat);
///     }
///     Outcome::from_value(seat)
/// }
///
/// assert_eq!(reserve(99).message(), Some("seat 99 does not exist"));
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::Outcome::from_error($crate::Error::new(format!($($arg)*)))
    };
}
