//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] names the constructor's current argument
//! (`Inner`) and the same constructor applied to another type (`WithType<B>`),
//! which is enough to state [`Functor`](super::Functor) once for both
//! containers.
//!
//! # Example
//!
//! ```rust
//! use safetypes::control::Optional;
//! use safetypes::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Optional<String> = empty_like(Optional::Some(42));
//! assert_eq!(none_string, Optional::None);
//! ```

use crate::control::{Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T> TypeConstructor for Outcome<T> {
    type Inner = T;
    type WithType<B> = Outcome<B>;
}
