//! The `Sequence` type and its mapping operation.

use std::fmt;
use std::iter::FusedIterator;

use crate::control::{Outcome, result_of};
use crate::error::Error;

/// Where a [`Sequence`] is in its lifetime.
///
/// `NotStarted -> Producing -> (Exhausted | Stopped)`; the last two are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceState {
    /// Nothing has been pulled yet.
    NotStarted,
    /// At least one element has been pulled and more may follow.
    Producing,
    /// The producer ran out of elements.
    Exhausted,
    /// The consumer stopped before the producer ran out.
    Stopped,
}

impl SequenceState {
    /// Returns `true` for `Exhausted` and `Stopped`.
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Exhausted | Self::Stopped)
    }
}

/// A forward-only, non-restartable sequence of `Outcome<T>` elements.
///
/// Elements are produced on demand, through [`Iterator::next`] or
/// [`Sequence::drive`]. A sequence is meant for a single consumer; dropping it
/// before the end abandons the producer, which releases whatever it owns.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::Outcome;
/// use safetypes::error::Error;
/// use safetypes::iter::Sequence;
///
/// let sequence = Sequence::from_pairs(vec![(1, None), (0, Some(Error::msg("bad row")))]);
/// let collected: Vec<Outcome<i32>> = sequence.collect();
///
/// assert_eq!(collected[0], Outcome::Ok(1));
/// assert!(collected[1].is_err());
/// ```
pub struct Sequence<'a, T> {
    producer: Box<dyn Iterator<Item = Outcome<T>> + 'a>,
    state: SequenceState,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Creates a sequence from any source of outcomes.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T>>,
        I::IntoIter: 'a,
    {
        Self {
            producer: Box::new(items.into_iter()),
            state: SequenceState::NotStarted,
        }
    }

    /// Creates a sequence whose elements all succeed.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::new(values.into_iter().map(Outcome::Ok))
    }

    /// Creates a sequence from conventional `(value, error)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, Option<Error>)>,
        I::IntoIter: 'a,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(value, error)| result_of(value, error)),
        )
    }

    /// Creates a sequence that calls `producer` for every pull until it
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::ok;
    /// use safetypes::iter::Sequence;
    ///
    /// let mut countdown = 3;
    /// let sequence = Sequence::from_fn(move || {
    ///     (countdown > 0).then(|| {
    ///         countdown -= 1;
    ///         ok(countdown)
    ///     })
    /// });
    ///
    /// assert_eq!(sequence.try_collect().unwrap(), vec![2, 1, 0]);
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnMut() -> Option<Outcome<T>> + 'a,
    {
        Self::new(std::iter::from_fn(producer))
    }

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> SequenceState {
        self.state
    }

    /// Stops the sequence and drops the producer.
    ///
    /// Later pulls return `None`. Stopping a finished sequence does nothing.
    pub fn stop(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state = SequenceState::Stopped;
        self.producer = Box::new(std::iter::empty());
        tracing::trace!(target: "safetypes::iter", "sequence stopped by consumer");
    }

    /// Feeds every element to `consumer` until it returns `false` or the
    /// producer runs out, and returns the final state.
    ///
    /// No element is pulled after `consumer` returns `false`.
    pub fn drive<C>(mut self, mut consumer: C) -> SequenceState
    where
        C: FnMut(Outcome<T>) -> bool,
    {
        while let Some(item) = self.next() {
            if !consumer(item) {
                self.stop();
                break;
            }
        }
        self.state
    }

    /// Collects every value, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetypes::control::{err, ok};
    /// use safetypes::error::Error;
    /// use safetypes::iter::Sequence;
    ///
    /// let failing = Sequence::new(vec![ok(1), err(Error::msg("x")), ok(3)]);
    /// assert!(failing.try_collect().is_err_and(|error| error.to_string() == "x"));
    /// ```
    pub fn try_collect(self) -> Outcome<Vec<T>> {
        let mut values = Vec::new();
        let mut failure = None;
        self.drive(|item| match item {
            Outcome::Ok(value) => {
                values.push(value);
                true
            }
            Outcome::Err(error) => {
                failure = Some(error);
                false
            }
        });
        result_of(values, failure)
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = Outcome<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            SequenceState::Exhausted | SequenceState::Stopped => return None,
            SequenceState::NotStarted => {
                self.state = SequenceState::Producing;
                tracing::trace!(target: "safetypes::iter", "sequence started");
            }
            SequenceState::Producing => {}
        }

        let item = self.producer.next();
        if item.is_none() {
            self.state = SequenceState::Exhausted;
            tracing::trace!(target: "safetypes::iter", "sequence exhausted");
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_finished() {
            (0, Some(0))
        } else {
            self.producer.size_hint()
        }
    }
}

impl<T> FusedIterator for Sequence<'_, T> {}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Lazily applies `function` to every successful element of `sequence`.
///
/// Upstream errors are forwarded without calling `function`. Nothing is
/// pulled from `sequence` until the result is pulled, and each pull of the
/// result pulls exactly one upstream element.
///
/// # Examples
///
/// ```rust
/// use safetypes::control::{Outcome, ok};
/// use safetypes::error::Error;
/// use safetypes::iter::{Sequence, map};
///
/// let parsed = map(Sequence::from_values(vec!["1", "x"]), |text: &str| {
///     Outcome::from(text.parse::<i32>())
/// });
/// let collected: Vec<Outcome<i32>> = parsed.collect();
///
/// assert_eq!(collected[0], ok(1));
/// assert!(collected[1].is_err());
/// ```
pub fn map<'a, T, U, F>(sequence: Sequence<'a, T>, mut function: F) -> Sequence<'a, U>
where
    T: 'a,
    U: 'a,
    F: FnMut(T) -> Outcome<U> + 'a,
{
    Sequence::new(sequence.map(move |item| match item {
        Outcome::Ok(value) => function(value),
        Outcome::Err(error) => Outcome::Err(error),
    }))
}
