//! Functor type class - mapping over container values.
//!
//! [`Functor::fmap`] is the method form of
//! [`map_optional`](crate::control::map_optional) and
//! [`map_outcome`](crate::control::map_outcome), usable wherever code is
//! generic over the container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use safetypes::control::{Optional, none, some};
//! use safetypes::typeclass::Functor;
//!
//! let transformed: Optional<String> = some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Optional::Some("5".to_string()));
//!
//! let untouched: Optional<String> = none::<i32>().fmap(|n| n.to_string());
//! assert_eq!(untouched, Optional::None);
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome, map_optional, map_outcome};

/// A type class for types that can have a function mapped over their contents.
///
/// The function runs only when the container holds a value; the shape of the
/// container never changes.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::{Optional, some};
    /// use safetypes::typeclass::Functor;
    ///
    /// let name = some("hello".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Optional::Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Replaces the value inside the functor with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        map_optional(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        map_optional(self.as_ref(), function)
    }
}

// =============================================================================
// Outcome<T> Implementation
// =============================================================================

impl<T> Functor for Outcome<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> B,
    {
        map_outcome(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B>
    where
        F: FnOnce(&T) -> B,
    {
        map_outcome(self.as_ref(), function)
    }
}
