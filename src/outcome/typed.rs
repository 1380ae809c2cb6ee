use crate::types::{OperationStatus, PartsError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of an operation whose failure reason is a caller-chosen type `E`.
///
/// `TypedOutcome<V, E>` carries the same invariant as [`Outcome`](crate::Outcome):
/// a success value or an error, never both. The difference is the error arm.
/// `E` is a closed type of your choosing, typically an enum, so a `match` over
/// it is checked for exhaustiveness at compile time. `E` needs no special trait.
///
/// # Type Parameters
///
/// * `V` - The value returned by the operation
/// * `E` - The error returned by the operation
///
/// # Examples
///
/// ```
/// use outcome::{OperationStatus, TypedOutcome};
///
/// #[derive(Debug, PartialEq)]
/// enum EditUserError {
///     NotFound,
/// }
///
/// fn edit_user(exists: bool) -> TypedOutcome<&'static str, EditUserError> {
///     if !exists {
///         return TypedOutcome::Failed(EditUserError::NotFound);
///     }
///     TypedOutcome::Success("John456")
/// }
///
/// let (status, user, error) = edit_user(false).into_status_parts();
/// assert_eq!(status, OperationStatus::Failed);
/// assert_eq!(user, None);
/// assert_eq!(error, Some(EditUserError::NotFound));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum TypedOutcome<V, E> {
    /// The operation completed and produced a value.
    Success(V),
    /// The operation failed with the given error.
    Failed(E),
}

impl<V, E> TypedOutcome<V, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn from_error(error: E) -> Self {
        Self::Failed(error)
    }

    /// Reassembles an outcome from optional parts.
    ///
    /// # Errors
    ///
    /// Returns [`PartsError`] unless exactly one part is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{PartsError, TypedOutcome};
    ///
    /// let outcome = TypedOutcome::<i32, &str>::from_parts(None, Some("boom"));
    /// assert_eq!(outcome, Ok(TypedOutcome::Failed("boom")));
    ///
    /// let both = TypedOutcome::<i32, &str>::from_parts(Some(1), Some("boom"));
    /// assert_eq!(both, Err(PartsError::BothPresent));
    /// ```
    pub fn from_parts(value: Option<V>, error: Option<E>) -> Result<Self, PartsError> {
        match (value, error) {
            (Some(value), None) => Ok(Self::Success(value)),
            (None, Some(error)) => Ok(Self::Failed(error)),
            (None, None) => Err(PartsError::MissingBoth),
            (Some(_), Some(_)) => Err(PartsError::BothPresent),
        }
    }

    /// Returns the finishing status of the operation.
    #[must_use]
    #[inline]
    pub fn status(&self) -> OperationStatus {
        match self {
            Self::Success(_) => OperationStatus::Success,
            Self::Failed(_) => OperationStatus::Failed,
        }
    }

    /// Returns `true` if the operation was successful.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Converts from `&TypedOutcome<V, E>` to `TypedOutcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> TypedOutcome<&V, &E> {
        match self {
            Self::Success(value) => TypedOutcome::Success(value),
            Self::Failed(error) => TypedOutcome::Failed(error),
        }
    }

    /// Destructures the outcome into a `(value, error)` pair.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<V>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failed(error) => (None, Some(error)),
        }
    }

    /// Destructures the outcome into a `(status, value, error)` triple.
    #[must_use]
    #[inline]
    pub fn into_status_parts(self) -> (OperationStatus, Option<V>, Option<E>) {
        let status = self.status();
        let (value, error) = self.into_parts();
        (status, value, error)
    }

    /// Maps the value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> TypedOutcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => TypedOutcome::Success(f(value)),
            Self::Failed(error) => TypedOutcome::Failed(error),
        }
    }

    /// Maps the error, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::TypedOutcome;
    ///
    /// let outcome: TypedOutcome<i32, u16> = TypedOutcome::Failed(404);
    /// let mapped = outcome.map_err(|code| format!("HTTP {code}"));
    /// assert_eq!(mapped.error().map(String::as_str), Some("HTTP 404"));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> TypedOutcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => TypedOutcome::Success(value),
            Self::Failed(error) => TypedOutcome::Failed(f(error)),
        }
    }

    /// Chains an operation that only runs if this one succeeded.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> TypedOutcome<U, E>
    where
        F: FnOnce(V) -> TypedOutcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failed(error) => TypedOutcome::Failed(error),
        }
    }

    /// Calls `op` with the error if the operation failed, otherwise keeps the value.
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> TypedOutcome<V, G>
    where
        F: FnOnce(E) -> TypedOutcome<V, G>,
    {
        match self {
            Self::Success(value) => TypedOutcome::Success(value),
            Self::Failed(error) => op(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failed(_) => default,
        }
    }

    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failed(error) => f(error),
        }
    }

    /// Calls `f` with a reference to the error, if any, and returns the outcome unchanged.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failed(error) = &self {
            f(error);
        }
        self
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for TypedOutcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<V, E> From<TypedOutcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: TypedOutcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V, E> From<TypedOutcome<V, E>> for (Option<V>, Option<E>) {
    #[inline]
    fn from(outcome: TypedOutcome<V, E>) -> Self {
        outcome.into_parts()
    }
}

impl<V, E> From<TypedOutcome<V, E>> for (OperationStatus, Option<V>, Option<E>) {
    #[inline]
    fn from(outcome: TypedOutcome<V, E>) -> Self {
        outcome.into_status_parts()
    }
}

/// Collects successful values, stopping at the first failure.
impl<V, E, C> FromIterator<TypedOutcome<V, E>> for TypedOutcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = TypedOutcome<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                TypedOutcome::Success(value) => Some(value),
                TypedOutcome::Failed(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => TypedOutcome::Failed(error),
            None => TypedOutcome::Success(collected),
        }
    }
}
