//! Type class traits over the crate's containers.
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with GATs
//! - [`Functor`]: mapping over the value inside [`Optional`] and [`Outcome`]
//!
//! [`Optional`]: crate::control::Optional
//! [`Outcome`]: crate::control::Outcome

mod functor;
mod higher;

pub use functor::Functor;
pub use higher::TypeConstructor;
