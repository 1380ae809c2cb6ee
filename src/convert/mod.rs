//! Conversion helpers between `Result`, [`Outcome`] and [`TypedOutcome`].
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! wrap existing `Result`-returning code, widen a closed error type into the
//! open form, or narrow an open outcome down to a plain [`Error`].
//!
//! # Examples
//!
//! ```
//! use outcome::convert::*;
//! use outcome::{Error, TypedOutcome};
//!
//! let result: Result<i32, Error> = Err(Error::new("failed"));
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_failed());
//!
//! let typed = open_to_typed(outcome);
//! assert_eq!(typed, TypedOutcome::Failed(Error::new("failed")));
//! ```

use crate::traits::ErrorLike;
use crate::types::alloc_type::{Box, String};
use crate::{Error, Outcome, TypedOutcome};

/// Converts a `Result` into an open [`Outcome`], boxing the error.
///
/// # Examples
///
/// ```
/// use outcome::convert::result_to_outcome;
/// use outcome::Error;
///
/// let outcome = result_to_outcome(Ok::<_, Error>(42));
/// assert_eq!(outcome.into_value(), Some(42));
/// ```
#[inline]
pub fn result_to_outcome<V, E: ErrorLike>(result: Result<V, E>) -> Outcome<V> {
    result.into()
}

/// Converts an open [`Outcome`] into a `Result` with a boxed error.
///
/// # Examples
///
/// ```
/// use outcome::convert::outcome_to_result;
/// use outcome::{Error, ErrorLike, Outcome};
///
/// let outcome: Outcome<i32> = Error::new("nope").into();
/// let err = outcome_to_result(outcome).unwrap_err();
/// assert_eq!(err.message(), "nope");
/// ```
#[inline]
pub fn outcome_to_result<V>(outcome: Outcome<V>) -> Result<V, Box<dyn ErrorLike>> {
    outcome.into_result()
}

/// Widens a [`TypedOutcome`] whose error is [`ErrorLike`] into an open [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::convert::typed_to_open;
/// use outcome::{Error, TypedOutcome};
///
/// let typed: TypedOutcome<(), Error> = TypedOutcome::Failed(Error::new("gone"));
/// assert_eq!(typed_to_open(typed).message(), Some("gone"));
/// ```
#[inline]
pub fn typed_to_open<V, E: ErrorLike>(outcome: TypedOutcome<V, E>) -> Outcome<V> {
    match outcome {
        TypedOutcome::Success(value) => Outcome::Success(value),
        TypedOutcome::Failed(error) => Outcome::from_error(error),
    }
}

/// Narrows an open [`Outcome`] into a [`TypedOutcome`] over [`Error`].
///
/// An error that already is an [`Error`] is cloned as is. Any other error keeps
/// only its message.
///
/// # Examples
///
/// ```
/// use outcome::convert::open_to_typed;
/// use outcome::{error_base, Error, Outcome, TypedOutcome};
///
/// error_base! {
///     struct NotFound => "not found";
/// }
///
/// let open: Outcome<u8> = NotFound.into();
/// assert_eq!(open_to_typed(open), TypedOutcome::Failed(Error::new("not found")));
/// ```
pub fn open_to_typed<V>(outcome: Outcome<V>) -> TypedOutcome<V, Error> {
    match outcome {
        Outcome::Success(value) => TypedOutcome::Success(value),
        Outcome::Failed(error) => match error.downcast_ref::<Error>() {
            Some(error) => TypedOutcome::Failed(error.clone()),
            None => TypedOutcome::Failed(Error::new(String::from(error.message()))),
        },
    }
}

/// Lifts an error-only result into a [`TypedOutcome`].
///
/// Operations that produce nothing on success often return `Option<E>`, with
/// `None` meaning success. This turns that convention into an outcome so it
/// can be inspected or destructured like any other.
///
/// # Examples
///
/// ```
/// use outcome::convert::error_to_outcome;
/// use outcome::OperationStatus;
///
/// assert_eq!(error_to_outcome::<&str>(None).status(), OperationStatus::Success);
/// assert_eq!(error_to_outcome(Some("missing")).into_error(), Some("missing"));
/// ```
#[inline]
pub fn error_to_outcome<E>(error: Option<E>) -> TypedOutcome<(), E> {
    match error {
        Some(error) => TypedOutcome::Failed(error),
        None => TypedOutcome::Success(()),
    }
}
