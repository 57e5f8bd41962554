//! # safetypes
//!
//! Explicit presence and outcome containers with an Option/Result-style
//! combinator surface, plus a lazy pull-based sequence transformer.
//!
//! ## Overview
//!
//! - **Containers**: [`Optional`](control::Optional) (`Some`/`None`) and
//!   [`Outcome`](control::Outcome) (`Ok`/`Err`), with predicates, unwrapping,
//!   in-place mutation and conversion between the two
//! - **Combinators**: free functions that change the wrapped type
//!   (`map_optional`, `and_then`, `map_outcome`, `map_outcome_err`, ...)
//! - **Errors**: a shareable [`Error`](error::Error) with context chaining
//! - **Sequences**: lazy [`Sequence`](iter::Sequence)s of fallible elements
//!   with an early-stopping [`map`](iter::map)
//! - **Type Classes**: [`Functor`](typeclass::Functor) over both containers
//!
//! ## Feature Flags
//!
//! - `iter`: the lazy sequence transformer
//! - `typeclass`: `TypeConstructor` and `Functor`
//! - `full`: enable all features
//!
//! ## Failure Channels
//!
//! Absence and failure are ordinary values to branch on. Unwrapping the wrong
//! variant is a programmer error: it emits a `tracing` error event and
//! panics with a diagnostic of the form `"<message>: <payload>"`.
//!
//! ## Example
//!
//! ```rust
//! use safetypes::prelude::*;
//!
//! let port = option_of(8080_u16)
//!     .filter(|port| *port >= 1024)
//!     .as_ok_or(Error::msg("privileged port"))
//!     .wrap_err("binding listener");
//!
//! assert_eq!(port.to_string(), "Ok(8080)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use safetypes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::Error;

    #[cfg(feature = "iter")]
    pub use crate::iter::{Sequence, SequenceState};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;
pub mod error;

#[cfg(feature = "iter")]
pub mod iter;

#[cfg(feature = "typeclass")]
pub mod typeclass;
