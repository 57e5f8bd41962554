//! Tests for the lazy `Sequence` transformer.
//!
//! A sequence is driven by a single consumer; `map` must stay lazy and must
//! stop pulling upstream as soon as the consumer stops.

#![cfg(feature = "iter")]

use rstest::rstest;
use safetypes::control::{Outcome, err, ok};
use safetypes::error::Error;
use safetypes::iter::{Sequence, SequenceState, map};
use std::cell::{Cell, RefCell};

/// Raises its flag when dropped.
struct DropFlag<'a>(&'a Cell<bool>);

impl Drop for DropFlag<'_> {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// An endless producer that owns `flag` and counts its pulls.
fn guarded<'a>(flag: DropFlag<'a>, pulls: &'a Cell<usize>) -> Sequence<'a, usize> {
    Sequence::from_fn(move || {
        let _owned = &flag;
        pulls.set(pulls.get() + 1);
        Some(ok(pulls.get()))
    })
}

/// A producer over `values` that records how many elements were pulled.
fn counting<'a>(values: &'a [i32], pulls: &'a Cell<usize>) -> Sequence<'a, i32> {
    Sequence::from_fn(move || {
        let index = pulls.get();
        let value = values.get(index)?;
        pulls.set(index + 1);
        Some(ok(*value))
    })
}

// =============================================================================
// Early Stop
// =============================================================================

#[rstest]
fn stopping_after_first_element_halts_upstream() {
    let pulls = Cell::new(0);
    let squares = map(counting(&[1, 2, 3], &pulls), |value| ok(value * value));

    let mut received = Vec::new();
    let state = squares.drive(|item| {
        received.push(item.unwrap());
        false
    });

    assert_eq!(received, vec![1]);
    assert_eq!(state, SequenceState::Stopped);
    assert!(pulls.get() <= 2);
    assert_eq!(pulls.get(), 1);
}

#[rstest]
fn function_runs_only_for_requested_elements() {
    let pulls = Cell::new(0);
    let calls = Cell::new(0);
    let mapped = map(counting(&[1, 2, 3, 4], &pulls), |value| {
        calls.set(calls.get() + 1);
        ok(value)
    });

    let taken: Vec<Outcome<i32>> = mapped.take(2).collect();

    assert_eq!(taken, vec![ok(1), ok(2)]);
    assert_eq!(calls.get(), 2);
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn map_is_lazy_until_driven() {
    let pulls = Cell::new(0);
    let calls = Cell::new(0);
    let mapped = map(counting(&[1, 2], &pulls), |value| {
        calls.set(calls.get() + 1);
        ok(value)
    });

    assert_eq!(mapped.state(), SequenceState::NotStarted);
    assert_eq!(pulls.get(), 0);
    assert_eq!(calls.get(), 0);
    drop(mapped);
    assert_eq!(pulls.get(), 0);
}

#[rstest]
fn infinite_producer_stops_with_consumer() {
    let mut received = Vec::new();
    let state = map(Sequence::from_values(1_u64..), |value| ok(value * 10)).drive(|item| {
        received.push(item.unwrap());
        received.len() < 4
    });

    assert_eq!(received, vec![10, 20, 30, 40]);
    assert_eq!(state, SequenceState::Stopped);
}

// =============================================================================
// Resource Release
// =============================================================================

#[rstest]
fn stop_drops_producer_immediately() {
    let dropped = Cell::new(false);
    let pulls = Cell::new(0);
    let mut sequence = guarded(DropFlag(&dropped), &pulls);

    assert_eq!(sequence.next(), Some(ok(1)));
    assert!(!dropped.get());

    sequence.stop();

    assert!(dropped.get());
    assert_eq!(sequence.state(), SequenceState::Stopped);
    assert_eq!(sequence.next(), None);
    assert_eq!(pulls.get(), 1);
}

#[rstest]
fn stop_releases_producer_behind_map() {
    let dropped = Cell::new(false);
    let pulls = Cell::new(0);
    let mut mapped = map(guarded(DropFlag(&dropped), &pulls), |value| ok(value * 2));

    assert_eq!(mapped.next(), Some(ok(2)));
    mapped.stop();

    assert!(dropped.get());
    assert_eq!(pulls.get(), 1);
}

#[rstest]
fn drive_stop_releases_producer() {
    let dropped = Cell::new(false);
    let pulls = Cell::new(0);
    let mut received = Vec::new();

    let state = map(guarded(DropFlag(&dropped), &pulls), |value| ok(value + 10)).drive(|item| {
        assert!(!dropped.get());
        received.push(item.unwrap());
        received.len() < 2
    });

    assert_eq!(state, SequenceState::Stopped);
    assert!(dropped.get());
    assert_eq!(received, vec![11, 12]);
    assert_eq!(pulls.get(), 2);
}

// =============================================================================
// Exhaustion
// =============================================================================

#[rstest]
fn drive_to_exhaustion() {
    let mut received = Vec::new();
    let state = map(Sequence::from_values(vec![1, 2, 3]), |value| ok(value * value)).drive(|item| {
        received.push(item.unwrap());
        true
    });

    assert_eq!(received, vec![1, 4, 9]);
    assert_eq!(state, SequenceState::Exhausted);
}

#[rstest]
fn empty_sequence_is_exhausted_immediately() {
    let calls = Cell::new(0);
    let state = Sequence::<i32>::from_values(Vec::new()).drive(|_| {
        calls.set(calls.get() + 1);
        true
    });

    assert_eq!(state, SequenceState::Exhausted);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn map_forwards_function_errors() {
    let parsed = map(Sequence::from_values(vec!["1", "two", "3"]), |text: &str| {
        Outcome::from(text.parse::<i32>()).wrap_err(format!("parsing {text:?}"))
    });
    let items: Vec<Outcome<i32>> = parsed.collect();

    assert_eq!(items[0], ok(1));
    assert!(items[1].is_err_and(|error| error.to_string().starts_with("parsing \"two\": ")));
    assert_eq!(items[2], ok(3));
}

#[rstest]
fn map_forwards_upstream_errors_without_calling_function() {
    let calls = Cell::new(0);
    let upstream = Sequence::from_pairs(vec![(1, None), (0, Some(Error::msg("bad row"))), (3, None)]);
    let mapped = map(upstream, |value: i32| {
        calls.set(calls.get() + 1);
        ok(value + 1)
    });
    let items: Vec<Outcome<i32>> = mapped.collect();

    assert_eq!(items, vec![ok(2), err(Error::msg("bad row")), ok(4)]);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn try_collect_stops_at_first_error() {
    let pulled = RefCell::new(Vec::new());
    let sequence = Sequence::new(vec![ok(1), err(Error::msg("x")), ok(3)].into_iter().inspect(
        |item: &Outcome<i32>| pulled.borrow_mut().push(item.is_ok()),
    ));

    let collected = sequence.try_collect();

    assert!(collected.is_err_and(|error| error.to_string() == "x"));
    assert_eq!(*pulled.borrow(), vec![true, false]);
}

#[rstest]
fn try_collect_error_unwraps() {
    let collected = Sequence::new(vec![ok(1), err(Error::msg("x"))]).try_collect();
    assert_eq!(collected.unwrap_err().to_string(), "x");
}

#[rstest]
fn try_collect_gathers_all_values() {
    let collected = map(Sequence::from_values(1..=3), |value| ok(value * 2)).try_collect();
    assert_eq!(collected, Outcome::Ok(vec![2, 4, 6]));
}

// =============================================================================
// Iterator Behaviour
// =============================================================================

#[rstest]
fn chained_maps_compose() {
    let doubled = map(Sequence::from_values(vec![1, 2, 3]), |value| ok(value * 2));
    let rendered = map(doubled, |value| ok(value.to_string()));

    assert_eq!(
        rendered.try_collect(),
        Outcome::Ok(vec!["2".to_string(), "4".to_string(), "6".to_string()])
    );
}

#[rstest]
fn size_hint_follows_producer() {
    let sequence = Sequence::from_values(vec![1, 2, 3]);
    assert_eq!(sequence.size_hint(), (3, Some(3)));
}

#[rstest]
fn fused_after_exhaustion() {
    let mut sequence = Sequence::from_values(vec![1]);
    assert_eq!(sequence.next(), Some(ok(1)));
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.state(), SequenceState::Exhausted);
}
