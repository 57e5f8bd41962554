//! Presence and outcome containers.
//!
//! This module provides the two containers and everything that operates on
//! them:
//!
//! - [`Optional`]: a value that is either `Some` or `None`
//! - [`Outcome`]: a computation that either succeeded (`Ok`) or failed (`Err`)
//! - Free combinators that change the wrapped type ([`map_optional`],
//!   [`and_then`], [`map_outcome`], [`map_outcome_err`], ...)
//! - Conversions between the two ([`as_ok_or`], [`as_option_value`], ...)
//!
//! Absence and failure are ordinary values. Unwrapping the wrong variant is a
//! programmer error and panics with a diagnostic; it is never turned back into
//! an `Err`.
//!
//! # Examples
//!
//! ## Lookup With a Fallback
//!
//! ```rust
//! use safetypes::control::{Optional, option_of};
//!
//! fn lookup(name: &str) -> Optional<u16> {
//!     option_of(if name == "http" { 80 } else { 0 })
//! }
//!
//! assert_eq!(lookup("http").unwrap_or(8080), 80);
//! assert_eq!(lookup("gopher").unwrap_or(8080), 8080);
//! ```
//!
//! ## Adding Context to a Failure
//!
//! ```rust
//! use safetypes::control::{Outcome, as_ok_or};
//! use safetypes::control::{none, Optional};
//! use safetypes::error::Error;
//!
//! let user: Optional<String> = none();
//! let outcome: Outcome<String> = as_ok_or(user, Error::msg("no such user"))
//!     .wrap_err("rendering profile");
//!
//! assert_eq!(outcome.to_string(), "Err(rendering profile: no such user)");
//! ```

mod bridge;
mod fatal;
mod optional;
mod outcome;

pub use bridge::{as_ok_or, as_ok_or_else, as_option_err, as_option_value};
pub use optional::{
    Optional, and, and_then, map_optional, map_optional_or, map_optional_or_else, none,
    option_of, some,
};
pub use outcome::{
    Outcome, err, map_outcome, map_outcome_err, map_outcome_or, map_outcome_or_else, ok,
    result_of,
};
