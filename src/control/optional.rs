//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which is either `Some(T)` or
//! `None`, together with the free combinators that change the wrapped type
//! (`map_optional`, `and_then`, ...).
//!
//! # Examples
//!
//! ```rust
//! use safetypes::control::{Optional, map_optional, some};
//!
//! let port = some(8080).filter(|port| *port > 1024);
//! assert!(port.is_some());
//!
//! let rendered = map_optional(port, |port| format!(":{port}"));
//! assert_eq!(rendered, Optional::Some(":8080".to_string()));
//! ```
//!
//! # Mutation
//!
//! [`Optional::insert`], the `get_or_insert*` family, [`Optional::take`] and
//! [`Optional::take_if`] are the only operations that change a container in
//! place. They need `&mut self`, so sharing one container between threads
//! requires the caller's own synchronization.

use std::fmt;

use super::fatal;
use super::outcome::Outcome;
use crate::error::Error;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Examples
///
/// ```rust
/// use safetypes::control::Optional;
///
/// let mut slot: Optional<i32> = Optional::None;
/// *slot.get_or_insert(1) += 1;
/// assert_eq!(slot, Optional::Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

/// Creates a present value.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates an absent value.
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Creates an `Optional` from a raw value, treating `T::default()` as absence.
///
/// This conflates "legitimately zero" with "absent": `option_of(0)` and
/// `option_of(String::new())` are both `None`. Use [`some`] when a zero value
/// is meaningful.
///
/// The check uses `PartialEq`, so for floats `-0.0` counts as zero and gives
/// `None`. `NaN` never equals the default and gives `Some`.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::{Optional, option_of};
///
/// assert_eq!(option_of(3), Optional::Some(3));
/// assert_eq!(option_of(0), Optional::None);
/// assert_eq!(option_of(String::new()), Optional::None);
/// ```
pub fn option_of<T>(value: T) -> Optional<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        Optional::None
    } else {
        Optional::Some(value)
    }
}

impl<T> Optional<T> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present and matches `predicate`.
    ///
    /// `predicate` is not called on `None`.
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if no value is present or the value matches `predicate`.
    ///
    /// `predicate` is not called on `None`.
    #[inline]
    pub fn is_none_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fatal::abort("called `Optional::unwrap()` on a `None` value"),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fatal::abort(message),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `factory`.
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory(),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Calls `function` with the value if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Keeps the value only if it matches `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            found @ Self::Some(_) => found,
            Self::None => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `factory`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            found @ Self::Some(_) => found,
            Self::None => factory(),
        }
    }

    /// Returns whichever of `self` and `other` holds a value if exactly one
    /// does, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::{Optional, none, some};
    ///
    /// assert_eq!(some(1).xor(none()), Optional::Some(1));
    /// assert_eq!(none().xor(some(2)), Optional::Some(2));
    /// assert_eq!(some(1).xor(some(2)), Optional::None);
    /// assert_eq!(none::<i32>().xor(none()), Optional::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (found @ Self::Some(_), Self::None) | (Self::None, found @ Self::Some(_)) => found,
            _ => Self::None,
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Stores `value`, dropping any previous one, and returns a reference to it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Some(value);
        self.slot()
    }

    /// Stores `value` if empty, then returns a reference to the contained value.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `factory` if empty, then returns a reference to
    /// the contained value.
    ///
    /// `factory` is not called when a value is already present.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, factory: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_none() {
            *self = Self::Some(factory());
        }
        self.slot()
    }

    /// Takes the value out, leaving `None` behind.
    ///
    /// Taking from `None` returns `None` and leaves `self` unchanged.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::None)
    }

    /// Takes the value out only if it matches `predicate`.
    ///
    /// On a mismatch `self` is left untouched and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::{Optional, some};
    ///
    /// let mut slot = some(4);
    /// assert_eq!(slot.take_if(|value| *value % 2 == 1), Optional::None);
    /// assert_eq!(slot, Optional::Some(4));
    /// assert_eq!(slot.take_if(|value| *value % 2 == 0), Optional::Some(4));
    /// assert_eq!(slot, Optional::None);
    /// ```
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Self
    where
        P: FnOnce(&mut T) -> bool,
    {
        let matched = match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        };
        if matched { self.take() } else { Self::None }
    }

    fn slot(&mut self) -> &mut T {
        match self {
            Self::Some(value) => value,
            Self::None => unreachable!("Optional slot was filled before borrowing"),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to `Outcome::Ok(value)`, or `Outcome::Err(error)` if absent.
    #[inline]
    pub fn as_ok_or<E>(self, error: E) -> Outcome<T>
    where
        E: Into<Error>,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error.into()),
        }
    }

    /// Converts to `Outcome::Ok(value)`, or `Outcome::Err(factory())` if absent.
    ///
    /// `factory` is not called when a value is present.
    #[inline]
    pub fn as_ok_or_else<E, F>(self, factory: F) -> Outcome<T>
    where
        E: Into<Error>,
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(factory().into()),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Mutably borrows the contained value.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T: Default> Optional<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    /// Stores `T::default()` if empty, then returns a reference to the
    /// contained value.
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T {
        self.get_or_insert_with(T::default)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Free Combinators
// =============================================================================

/// Maps `Some(value)` to `Some(function(value))`; `None` stays `None`.
///
/// `function` is not called on `None`.
#[inline]
pub fn map_optional<T, U, F>(optional: Optional<T>, function: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match optional {
        Optional::Some(value) => Optional::Some(function(value)),
        Optional::None => Optional::None,
    }
}

/// Applies `function` to a present value, or returns `default`.
#[inline]
pub fn map_optional_or<T, U, F>(optional: Optional<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    match optional {
        Optional::Some(value) => function(value),
        Optional::None => default,
    }
}

/// Applies `function` to a present value, or returns `factory()`.
#[inline]
pub fn map_optional_or_else<T, U, D, F>(optional: Optional<T>, factory: D, function: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match optional {
        Optional::Some(value) => function(value),
        Optional::None => factory(),
    }
}

/// Returns `other` if `optional` holds a value, otherwise `None`.
///
/// The value held by `optional` is discarded.
#[inline]
pub fn and<T, U>(optional: Optional<T>, other: Optional<U>) -> Optional<U> {
    match optional {
        Optional::Some(_) => other,
        Optional::None => Optional::None,
    }
}

/// Returns `function(value)` if `optional` holds a value, otherwise `None`.
#[inline]
pub fn and_then<T, U, F>(optional: Optional<T>, function: F) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    match optional {
        Optional::Some(value) => function(value),
        Optional::None => Optional::None,
    }
}
