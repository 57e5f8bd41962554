//! Outcome type - the success or failure of an operation.
//!
//! `Outcome<T>` is either `Ok(T)` or `Err(Error)`. The error side is always
//! the crate's [`Error`], so an outcome only has one type parameter and
//! errors of any concrete type can flow through the same pipeline.
//!
//! Outcomes are never mutated after construction.
//!
//! # Examples
//!
//! ```rust
//! use safetypes::control::{Outcome, map_outcome, result_of};
//! use safetypes::error::Error;
//!
//! let parsed = result_of(7, None);
//! assert_eq!(map_outcome(parsed, |n| n * 6), Outcome::Ok(42));
//!
//! let failed: Outcome<i32> = result_of(0, Some(Error::msg("bad digit")));
//! assert_eq!(failed.to_string(), "Err(bad digit)");
//! ```

use std::fmt;

use super::fatal;
use super::optional::Optional;
use crate::error::Error;

/// The success (`Ok`) or failure (`Err`) of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A successful value.
    Ok(T),
    /// A failure description.
    Err(Error),
}

/// Creates a successful outcome.
#[inline]
pub const fn ok<T>(value: T) -> Outcome<T> {
    Outcome::Ok(value)
}

/// Creates a failed outcome from any error convertible into [`Error`].
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T>
where
    E: Into<Error>,
{
    Outcome::Err(error.into())
}

/// Creates an outcome from a `(value, error)` pair.
///
/// The result is `Err` whenever `error` is present; `value` is then dropped.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::{Outcome, result_of};
/// use safetypes::error::Error;
///
/// assert_eq!(result_of(5, None), Outcome::Ok(5));
/// assert!(result_of(0, Some(Error::msg("x"))).is_err());
/// ```
#[inline]
pub fn result_of<T>(value: T, error: Option<Error>) -> Outcome<T> {
    match error {
        Some(error) => Outcome::Err(error),
        None => Outcome::Ok(value),
    }
}

impl<T> Outcome<T> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value matches `predicate`.
    ///
    /// `predicate` is not called on `Err`.
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error matches `predicate`.
    ///
    /// `predicate` is not called on `Ok`.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Error) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with the error in the diagnostic.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => fatal::abort(fatal::with_payload(
                "called `Outcome::unwrap()` on an `Err` value",
                &error,
            )),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with a diagnostic of the form
    /// `"<message>: <error>"`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use safetypes::control::err;
    /// use safetypes::error::Error;
    ///
    /// // panics with "boom: x"
    /// err::<i32, _>(Error::msg("x")).expect("boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => fatal::abort(fatal::with_payload(message, &error)),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from `factory`.
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => factory(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `function` with the success value if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the error if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    /// Places `message` on top of the error; `Ok` passes through unchanged.
    ///
    /// The original error remains reachable through
    /// [`Error::chain`] and keeps its concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::err;
    /// use safetypes::error::{Error, MessageError};
    ///
    /// let wrapped = err::<i32, _>(Error::msg("timeout")).wrap_err("fetching quotes");
    /// let error = wrapped.unwrap_err();
    /// assert_eq!(error.to_string(), "fetching quotes: timeout");
    /// assert!(error.is::<MessageError>());
    /// ```
    #[inline]
    #[must_use]
    pub fn wrap_err(self, message: impl Into<String>) -> Self {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Err(error.wrap(message)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to `Some(value)` on `Ok`, `None` on `Err`.
    #[inline]
    pub fn as_option_value(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(_) => Optional::None,
        }
    }

    /// Converts to `Some(error)` on `Err`, `None` on `Ok`.
    #[inline]
    pub fn as_option_err(self) -> Optional<Error> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Err(error) => Optional::Some(error),
        }
    }

    /// Borrows the success value.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Splits into the conventional `(value, error)` pair.
    ///
    /// On `Err` the value is `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::{err, ok};
    /// use safetypes::error::Error;
    ///
    /// assert_eq!(ok(3).expand(), (3, None));
    ///
    /// let (value, error) = err::<i32, _>(Error::msg("x")).expand();
    /// assert_eq!(value, 0);
    /// assert_eq!(error.map(|error| error.to_string()), Some("x".to_string()));
    /// ```
    #[inline]
    pub fn expand(self) -> (T, Option<Error>) {
        match self {
            Self::Ok(value) => (value, None),
            Self::Err(error) => (T::default(), Some(error)),
        }
    }
}

impl<T: fmt::Debug> Outcome<T> {
    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with the value's `Debug` rendering in the
    /// diagnostic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::err;
    /// use safetypes::error::Error;
    ///
    /// let outcome = err::<Vec<i32>, _>(Error::msg("x"));
    /// assert_eq!(outcome.unwrap_err().to_string(), "x");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> Error {
        match self {
            Self::Ok(value) => fatal::abort(fatal::with_debug_payload(
                "called `Outcome::unwrap_err()` on an `Ok` value",
                &value,
            )),
            Self::Err(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with a diagnostic of the form
    /// `"<message>: <value:?>"`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> Error {
        match self {
            Self::Ok(value) => fatal::abort(fatal::with_debug_payload(message, &value)),
            Self::Err(error) => error,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync, Clone);

// =============================================================================
// Free Combinators
// =============================================================================

/// Maps `Ok(value)` to `Ok(function(value))`; `Err` passes through.
#[inline]
pub fn map_outcome<T, U, F>(outcome: Outcome<T>, function: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    match outcome {
        Outcome::Ok(value) => Outcome::Ok(function(value)),
        Outcome::Err(error) => Outcome::Err(error),
    }
}

/// Applies `function` to a success value, or returns `default`.
#[inline]
pub fn map_outcome_or<T, U, F>(outcome: Outcome<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    match outcome {
        Outcome::Ok(value) => function(value),
        Outcome::Err(_) => default,
    }
}

/// Applies `function` to a success value, or returns `factory()`.
#[inline]
pub fn map_outcome_or_else<T, U, D, F>(outcome: Outcome<T>, factory: D, function: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match outcome {
        Outcome::Ok(value) => function(value),
        Outcome::Err(_) => factory(),
    }
}

/// Maps the error with `function`; `Ok` passes through.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::{Outcome, err, map_outcome_err};
/// use safetypes::error::{Error, MessageError};
///
/// let failed: Outcome<i32> = err(Error::msg("x"));
/// let renamed = map_outcome_err(failed, |error| MessageError(format!("<{error}>")));
/// assert_eq!(renamed.to_string(), "Err(<x>)");
/// ```
#[inline]
pub fn map_outcome_err<T, E, F>(outcome: Outcome<T>, function: F) -> Outcome<T>
where
    E: Into<Error>,
    F: FnOnce(Error) -> E,
{
    match outcome {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(error) => Outcome::Err(function(error).into()),
    }
}
