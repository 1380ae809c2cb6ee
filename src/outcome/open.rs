use crate::traits::{ErrorBase, ErrorLike};
use crate::types::alloc_type::Box;
use crate::types::{Error, OperationStatus, PartsError};

/// The outcome of an operation whose failure reason can be any [`ErrorLike`].
///
/// `Outcome<V>` holds either the value an operation produced or the error that
/// explains why it failed, never both and never neither. The error arm is an
/// open, boxed `dyn ErrorLike`, so independently defined error types can be
/// returned from the same function without a shared enumeration. When the
/// set of failures is small and closed, reach for
/// [`TypedOutcome`](crate::TypedOutcome) instead.
///
/// Failures convert into an outcome at the return boundary: [`Error`],
/// `Box<dyn ErrorLike>`, `Result<V, E: ErrorLike>` and every [`ErrorBase`]
/// implement `Into<Outcome<V>>`.
///
/// # Variants
///
/// * `Success(V)` - The value returned by the operation
/// * `Failed(Box<dyn ErrorLike>)` - An error explaining why the operation failed
///
/// # Examples
///
/// ```
/// use outcome::{Error, ErrorLike, OperationStatus, Outcome};
///
/// fn create_user(name: &str) -> Outcome<String> {
///     if name == "taken" {
///         return Error::new("user already exists").into();
///     }
///     Outcome::from_value(name.to_uppercase())
/// }
///
/// assert_eq!(create_user("john").value().map(String::as_str), Some("JOHN"));
///
/// let (status, value, error) = create_user("taken").into_status_parts();
/// assert_eq!(status, OperationStatus::Failed);
/// assert!(value.is_none());
/// assert_eq!(error.unwrap().message(), "user already exists");
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<V> {
    /// The operation completed and produced a value.
    Success(V),
    /// The operation failed for the given reason.
    Failed(Box<dyn ErrorLike>),
}

impl<V> Outcome<V> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The value returned by the operation
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::from_value("John123");
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.value(), Some(&"John123"));
    /// ```
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome, boxing the error.
    ///
    /// # Arguments
    ///
    /// * `error` - An error explaining why the operation failed
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let outcome: Outcome<()> = Outcome::from_error(Error::new("disk full"));
    /// assert!(outcome.is_failed());
    /// assert_eq!(outcome.message(), Some("disk full"));
    /// ```
    #[inline]
    pub fn from_error<E: ErrorLike>(error: E) -> Self {
        Self::Failed(Box::new(error))
    }

    /// Creates a failed outcome from an already boxed error.
    #[inline]
    pub fn from_boxed_error(error: Box<dyn ErrorLike>) -> Self {
        Self::Failed(error)
    }

    /// Reassembles an outcome from the parts produced by [`into_parts`](Self::into_parts).
    ///
    /// Exactly one side must be present.
    ///
    /// # Errors
    ///
    /// * [`PartsError::MissingBoth`] if neither part is present
    /// * [`PartsError::BothPresent`] if both parts are present
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, PartsError};
    ///
    /// let outcome = Outcome::<i32>::from_parts(Some(3), None).unwrap();
    /// assert_eq!(outcome.value(), Some(&3));
    ///
    /// let missing = Outcome::<i32>::from_parts(None, None);
    /// assert_eq!(missing.unwrap_err(), PartsError::MissingBoth);
    /// ```
    pub fn from_parts(
        value: Option<V>,
        error: Option<Box<dyn ErrorLike>>,
    ) -> Result<Self, PartsError> {
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
    ///
    /// When this holds, [`value`](Self::value) is `Some` and
    /// [`error`](Self::error) is `None`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation failed.
    ///
    /// When this holds, [`error`](Self::error) is `Some` and
    /// [`value`](Self::value) is `None`.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// Returns the value, or `None` if the operation failed.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns the error, or `None` if the operation was successful.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&(dyn ErrorLike + 'static)> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error.as_ref()),
        }
    }

    /// Returns the error message, or `None` if the operation was successful.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.error().map(|error| error.message())
    }

    /// Consumes the outcome, returning the value if there is one.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Consumes the outcome, returning the error if there is one.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Box<dyn ErrorLike>> {
        match self {
            Self::Success(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Borrows the outcome as a `(value, error)` pair.
    #[must_use]
    #[inline]
    pub fn as_parts(&self) -> (Option<&V>, Option<&(dyn ErrorLike + 'static)>) {
        (self.value(), self.error())
    }

    /// Destructures the outcome into a `(value, error)` pair.
    ///
    /// Exactly one side of the pair is `Some`. The same split is available
    /// through `From` into `(Option<V>, Option<Box<dyn ErrorLike>>)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let (value, error) = Outcome::from_value(5).into_parts();
    /// assert_eq!(value, Some(5));
    /// assert!(error.is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<V>, Option<Box<dyn ErrorLike>>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failed(error) => (None, Some(error)),
        }
    }

    /// Destructures the outcome into a `(status, value, error)` triple.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{OperationStatus, Outcome};
    ///
    /// let (status, value, error) = Outcome::from_value("ok").into_status_parts();
    /// assert_eq!(status, OperationStatus::Success);
    /// assert_eq!(value, Some("ok"));
    /// assert!(error.is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn into_status_parts(self) -> (OperationStatus, Option<V>, Option<Box<dyn ErrorLike>>) {
        let status = self.status();
        let (value, error) = self.into_parts();
        (status, value, error)
    }

    /// Maps the value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::from_value(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Chains an operation that only runs if this one succeeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// fn parse_even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 {
    ///         Outcome::from_value(input)
    ///     } else {
    ///         Error::new("not even").into()
    ///     }
    /// }
    ///
    /// assert!(Outcome::from_value(4).and_then(parse_even).is_success());
    /// assert!(Outcome::from_value(3).and_then(parse_even).is_failed());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Calls `op` with the error if the operation failed, otherwise keeps the value.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Box<dyn ErrorLike>) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failed(error) => op(error),
        }
    }

    /// Returns the value, or `default` if the operation failed.
    #[must_use]
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failed(_) => default,
        }
    }

    /// Returns the value, or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(Box<dyn ErrorLike>) -> V,
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
        F: FnOnce(&dyn ErrorLike),
    {
        if let Self::Failed(error) = &self {
            f(error.as_ref());
        }
        self
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_value(1).into_result().ok(), Some(1));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, Box<dyn ErrorLike>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<V> From<Error> for Outcome<V> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<V, T: ErrorBase> From<T> for Outcome<V> {
    #[inline]
    fn from(error: T) -> Self {
        Self::from_error(error)
    }
}

impl<V> From<Box<dyn ErrorLike>> for Outcome<V> {
    #[inline]
    fn from(error: Box<dyn ErrorLike>) -> Self {
        Self::Failed(error)
    }
}

impl<V, E: ErrorLike> From<Result<V, E>> for Outcome<V> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<V> From<Outcome<V>> for Result<V, Box<dyn ErrorLike>> {
    #[inline]
    fn from(outcome: Outcome<V>) -> Self {
        outcome.into_result()
    }
}

impl<V> From<Outcome<V>> for (Option<V>, Option<Box<dyn ErrorLike>>) {
    #[inline]
    fn from(outcome: Outcome<V>) -> Self {
        outcome.into_parts()
    }
}

impl<V> From<Outcome<V>> for (OperationStatus, Option<V>, Option<Box<dyn ErrorLike>>) {
    #[inline]
    fn from(outcome: Outcome<V>) -> Self {
        outcome.into_status_parts()
    }
}

/// Collects successful values, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use outcome::{Error, Outcome};
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::from_value(1), Outcome::from_value(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let partial: Outcome<Vec<i32>> = vec![
///     Outcome::from_value(1),
///     Outcome::from_error(Error::new("bad")),
///     Outcome::from_error(Error::new("worse")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(partial.message(), Some("bad"));
/// ```
impl<V, C> FromIterator<Outcome<V>> for Outcome<C>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failed(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failed(error),
            None => Outcome::Success(collected),
        }
    }
}
