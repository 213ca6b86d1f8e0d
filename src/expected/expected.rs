use std::error::Error;

use derive_more::IsVariant;

/// The outcome of an operation that either produces a `T` or fails with an `E`.
///
/// Expected is used where a failure is an ordinary answer rather than a fault, such as a map miss
/// or a short read. The variant can only be read through checked accessors or pattern matching.
/// `Expected<(), E>` represents an operation with no success value.
///
/// Expected converts to and from [`Result`], so `?` can be used after [`into_result`](
/// Expected::into_result) or a plain `.into()`.
///
/// # Examples
/// ```
/// # use sf_lib::Expected;
/// let found: Expected<u8, &str> = Expected::Ok(5);
/// assert!(found.is_ok());
/// assert_eq!(found.ok_ref(), Some(&5));
///
/// let missing: Expected<u8, &str> = Expected::Err("missing");
/// assert!(!missing.is_ok());
/// assert_eq!(missing.into_result(), Err("missing"));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Expected<T, E> {
    /// The operation succeeded with a value.
    Ok(T),
    /// The operation failed with an error.
    Err(E),
}

impl<T, E> Expected<T, E> {
    /// Returns a reference to the success value, if there is one.
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Expected::Ok(value) => Some(value),
            Expected::Err(_) => None,
        }
    }

    /// Returns a reference to the error, if there is one.
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Expected::Ok(_) => None,
            Expected::Err(error) => Some(error),
        }
    }

    /// Converts self into the success value, discarding any error.
    pub fn into_ok(self) -> Option<T> {
        match self {
            Expected::Ok(value) => Some(value),
            Expected::Err(_) => None,
        }
    }

    /// Converts self into the error, discarding any success value.
    pub fn into_err(self) -> Option<E> {
        match self {
            Expected::Ok(_) => None,
            Expected::Err(error) => Some(error),
        }
    }

    /// Borrows the contents of self.
    pub const fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Expected::Ok(value) => Expected::Ok(value),
            Expected::Err(error) => Expected::Err(error),
        }
    }

    /// Maps the success value with the provided function, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Expected<U, E> {
        match self {
            Expected::Ok(value) => Expected::Ok(op(value)),
            Expected::Err(error) => Expected::Err(error),
        }
    }

    /// Maps the error with the provided function, leaving a success value untouched.
    pub fn map_err<F2, O: FnOnce(E) -> F2>(self, op: O) -> Expected<T, F2> {
        match self {
            Expected::Ok(value) => Expected::Ok(value),
            Expected::Err(error) => Expected::Err(op(error)),
        }
    }

    /// Calls `op` with the success value, or propagates the error.
    pub fn and_then<U, F: FnOnce(T) -> Expected<U, E>>(self, op: F) -> Expected<U, E> {
        match self {
            Expected::Ok(value) => op(value),
            Expected::Err(error) => Expected::Err(error),
        }
    }

    /// Returns the success value, or `default` if self is an error.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Expected::Ok(value) => value,
            Expected::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Expected::Ok(value) => value,
            Expected::Err(error) => op(error),
        }
    }

    /// Converts self into the equivalent [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: Error> Expected<T, E> {
    /// Returns the success value, or panics with the display message of the error.
    ///
    /// # Panics
    /// Panics if self is an error.
    #[track_caller]
    pub fn throw(self) -> T {
        match self {
            Expected::Ok(value) => value,
            Expected::Err(error) => panic!("{error}"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Expected::Ok(value),
            Err(error) => Expected::Err(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(value: Expected<T, E>) -> Self {
        match value {
            Expected::Ok(value) => Ok(value),
            Expected::Err(error) => Err(error),
        }
    }
}
