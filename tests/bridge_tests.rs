//! Tests for the free conversions between `Optional` and `Outcome`.

use rstest::rstest;
use safetypes::control::{
    Optional, Outcome, as_ok_or, as_ok_or_else, as_option_err, as_option_value, err, none, ok,
    some,
};
use safetypes::error::Error;
use std::cell::Cell;

#[rstest]
fn as_ok_or_some_is_ok() {
    assert_eq!(as_ok_or(some(5), Error::msg("missing")), Outcome::Ok(5));
}

#[rstest]
fn as_ok_or_none_carries_error() {
    let outcome = as_ok_or(none::<i32>(), Error::msg("missing"));
    assert_eq!(outcome, err(Error::msg("missing")));
}

#[rstest]
fn as_ok_or_else_some_skips_factory() {
    let calls = Cell::new(0);
    let outcome = as_ok_or_else(some(5), || {
        calls.set(calls.get() + 1);
        Error::msg("missing")
    });
    assert_eq!(outcome, Outcome::Ok(5));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn as_ok_or_else_none_uses_factory() {
    let outcome = as_ok_or_else(none::<i32>(), || std::io::Error::other("missing"));
    assert!(outcome.is_err_and(|error| error.is::<std::io::Error>()));
}

#[rstest]
fn as_option_value_matches_method() {
    assert_eq!(as_option_value(ok(5)), Optional::Some(5));
    assert_eq!(as_option_value(err::<i32, _>(Error::msg("x"))), Optional::None);
}

#[rstest]
fn as_option_err_matches_method() {
    assert_eq!(as_option_err(ok(5)), Optional::None);
    assert_eq!(
        as_option_err(err::<i32, _>(Error::msg("x"))),
        Optional::Some(Error::msg("x"))
    );
}

#[rstest]
fn roundtrip_through_outcome() {
    assert_eq!(as_ok_or(some(5), Error::msg("e")).as_option_value(), some(5));
    assert_eq!(
        as_ok_or(none::<i32>(), Error::msg("e")).as_option_value(),
        none::<i32>()
    );
}

#[rstest]
fn error_identity_survives_roundtrip() {
    let original = Error::msg("kept");
    let recovered = as_option_err(as_ok_or(none::<i32>(), original.clone())).unwrap();
    assert_eq!(recovered, original);
}
