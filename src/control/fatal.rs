//! Unrecoverable aborts for unwrapping the wrong variant.

use std::fmt;

/// Logs `diagnostic` and panics with it.
///
/// Reserved for programmer errors; absence and failure are ordinary values.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn abort(diagnostic: impl fmt::Display) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(
        target: "safetypes",
        %diagnostic,
        file = location.file(),
        line = location.line(),
        "unwrapped the wrong variant"
    );
    panic!("{diagnostic}")
}

/// Joins a caller message and a rendered payload with `": "`.
pub(crate) fn with_payload(message: &str, payload: &impl fmt::Display) -> String {
    format!("{message}: {payload}")
}

/// Like [`with_payload`], for payloads that only render with `Debug`.
pub(crate) fn with_debug_payload(message: &str, payload: &impl fmt::Debug) -> String {
    format!("{message}: {payload:?}")
}
