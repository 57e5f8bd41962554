//! Lazy, pull-based sequences of fallible elements.
//!
//! A [`Sequence`] yields [`Outcome`](crate::control::Outcome) elements, one
//! `(value, error)` pair per pull. [`map`] transforms a sequence lazily: the
//! mapping function runs only for elements the consumer actually requests,
//! and a consumer that stops early stops the upstream producer with it.
//!
//! # Examples
//!
//! ```rust
//! use safetypes::control::ok;
//! use safetypes::iter::{Sequence, SequenceState, map};
//!
//! let squares = map(Sequence::from_values(1..), |n: u64| ok(n * n));
//!
//! let mut seen = Vec::new();
//! let state = squares.drive(|square| {
//!     seen.push(square.unwrap());
//!     seen.len() < 3
//! });
//!
//! assert_eq!(seen, vec![1, 4, 9]);
//! assert_eq!(state, SequenceState::Stopped);
//! ```

mod sequence;

pub use sequence::{Sequence, SequenceState, map};
