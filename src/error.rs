//! The error value carried by [`Outcome::Err`](crate::control::Outcome::Err).
//!
//! [`Error`] wraps any `std::error::Error + Send + Sync + 'static` behind an
//! `Arc`, so an `Outcome` stays cheap to clone and safe to share between
//! threads. Context is added with [`Error::wrap`], which keeps the original
//! error reachable through [`std::error::Error::source`].
//!
//! # Examples
//!
//! ```rust
//! use safetypes::error::{Error, MessageError};
//!
//! let error = Error::msg("disk full").wrap("saving settings");
//! assert_eq!(error.to_string(), "saving settings: disk full");
//! assert_eq!(error.root_cause().to_string(), "disk full");
//! assert!(error.find::<MessageError>().is_some());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A plain-text error, the result of [`Error::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageError(pub String);

/// An error that places a message on top of an underlying cause.
///
/// Rendered as `"<message>: <cause>"`; the cause is returned from
/// [`source`](std::error::Error::source) with its concrete type intact.
#[derive(Debug, Clone)]
pub struct ContextError {
    message: String,
    cause: Arc<dyn StdError + Send + Sync + 'static>,
}

impl ContextError {
    /// The message added by the caller.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.message, self.cause)
    }
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// A shareable, type-erased error value.
///
/// Any standard error converts into `Error` through `From`, so `?` works on
/// `Result<_, E>` inside functions returning `Result<_, Error>`.
///
/// Two errors compare equal when they render to the same text. Equality
/// ignores the concrete error type: an `io::Error` and a message error with
/// the same text are equal.
#[derive(Clone)]
pub struct Error {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Error {
    /// Wraps a concrete error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error from a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::error::Error;
    ///
    /// assert_eq!(Error::msg("x").to_string(), "x");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Places `message` on top of this error.
    ///
    /// The original error stays reachable as the [`source`](StdError::source)
    /// of the returned error, and keeps its concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::error::Error;
    ///
    /// let wrapped = Error::msg("not found").wrap("loading profile");
    /// assert_eq!(wrapped.to_string(), "loading profile: not found");
    /// assert_eq!(wrapped.chain().count(), 2);
    /// ```
    #[must_use]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self::new(ContextError {
            message: message.into(),
            cause: self.inner,
        })
    }

    /// Returns the outermost error as a standard error reference.
    pub fn as_std(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Iterates over this error and every cause below it, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let first: &(dyn StdError + 'static) = self.as_std();
        std::iter::successors(Some(first), |error| (*error).source())
    }

    /// Returns the innermost cause.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self.as_std();
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// Returns the outermost error if it is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the first error in the chain that is an `E`.
    pub fn find<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.chain().find_map(|error| error.downcast_ref::<E>())
    }

    /// Returns `true` if any error in the chain is an `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.find::<E>().is_some()
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.to_string() == other.to_string()
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Error {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.as_std()
    }
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);
