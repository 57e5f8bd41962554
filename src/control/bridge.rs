//! Free-function conversions between [`Optional`] and [`Outcome`].
//!
//! These behave exactly like the corresponding methods and exist so a caller
//! can convert without naming the method receiver's type.

use super::optional::Optional;
use super::outcome::Outcome;
use crate::error::Error;

/// Converts `Some(value)` to `Ok(value)` and `None` to `Err(error)`.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::{Optional, as_ok_or, as_option_value, none, some};
/// use safetypes::error::Error;
///
/// assert_eq!(as_option_value(as_ok_or(some(5), Error::msg("missing"))), Optional::Some(5));
/// assert_eq!(as_option_value(as_ok_or(none::<i32>(), Error::msg("missing"))), Optional::None);
/// ```
#[inline]
pub fn as_ok_or<T, E>(optional: Optional<T>, error: E) -> Outcome<T>
where
    E: Into<Error>,
{
    optional.as_ok_or(error)
}

/// Converts `Some(value)` to `Ok(value)` and `None` to `Err(factory())`.
#[inline]
pub fn as_ok_or_else<T, E, F>(optional: Optional<T>, factory: F) -> Outcome<T>
where
    E: Into<Error>,
    F: FnOnce() -> E,
{
    optional.as_ok_or_else(factory)
}

/// Converts `Ok(value)` to `Some(value)` and `Err` to `None`.
#[inline]
pub fn as_option_value<T>(outcome: Outcome<T>) -> Optional<T> {
    outcome.as_option_value()
}

/// Converts `Err(error)` to `Some(error)` and `Ok` to `None`.
#[inline]
pub fn as_option_err<T>(outcome: Outcome<T>) -> Optional<Error> {
    outcome.as_option_err()
}
