//! Building sequences from scratch.
//!
//! The central constructor is [`unfold`]: seed state plus a step function.
//! [`try_unfold`] is its fallible sibling, and the small helpers ([`once`],
//! [`repeat_with`], [`empty`], [`from_iter`], [`from_fn`]) cover the common
//! shapes without hand-writing state.

use crate::{Sequence, Step};

/// Create a sequence from an initial state and a step function.
///
/// The step function receives the current state by value and returns the next
/// state together with the step to report. Once the step function reports
/// [`Step::Complete`], the state is dropped and the terminal payload is
/// re-emitted on every further advance (hence the `Return: Clone` bound on
/// the [`Sequence`] impl).
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // squares below a bound, zero-indexed
/// let mut seq = unfold(0u64, |n| {
///     if n >= 3 {
///         (n, Step::Complete(()))
///     } else {
///         (n + 1, Step::Yielded(n * n))
///     }
/// });
/// assert_eq!(seq.advance(), Step::Yielded(0));
/// assert_eq!(seq.advance(), Step::Yielded(1));
/// assert_eq!(seq.advance(), Step::Yielded(4));
/// assert_eq!(seq.advance(), Step::Complete(()));
/// assert_eq!(seq.advance(), Step::Complete(()));
/// ```
pub fn unfold<St, T, R, F>(state: St, step: F) -> Unfold<St, F, R>
where
    F: FnMut(St) -> (St, Step<T, R>),
{
    Unfold {
        state: UnfoldState::Live(state),
        step,
    }
}

enum UnfoldState<St, R> {
    Live(St),
    Finished(R),
    /// Transient marker while the step function runs; observable only after
    /// the step function panicked.
    Invalid,
}

impl<St, R> UnfoldState<St, R> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, UnfoldState::Invalid)
    }
}

/// Sequence created by [`unfold`].
pub struct Unfold<St, F, R> {
    state: UnfoldState<St, R>,
    step: F,
}

impl<St, T, R, F> Sequence for Unfold<St, F, R>
where
    F: FnMut(St) -> (St, Step<T, R>),
    R: Clone,
{
    type Item = T;
    type Return = R;

    fn advance(&mut self) -> Step<T, R> {
        match self.state.take() {
            UnfoldState::Live(st) => {
                let (next, step) = (self.step)(st);
                match step {
                    Step::Yielded(v) => {
                        self.state = UnfoldState::Live(next);
                        Step::Yielded(v)
                    }
                    Step::Complete(r) => {
                        self.state = UnfoldState::Finished(r.clone());
                        Step::Complete(r)
                    }
                }
            }
            UnfoldState::Finished(r) => {
                self.state = UnfoldState::Finished(r.clone());
                Step::Complete(r)
            }
            UnfoldState::Invalid => panic!("sequence advanced after its step function panicked"),
        }
    }
}

/// Create a fallible sequence from an initial state and a step function.
///
/// A producer failure (`Err`) surfaces on the advancing caller through the
/// terminal step: the sequence completes with `Err(e)` and the state is
/// dropped. Recovery contract: after a failure the sequence is finished, and
/// further advances re-emit the same error.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = try_unfold(0u32, |n| -> Result<(u32, Step<u32>), ProducerError> {
///     if n >= 2 {
///         Err(ProducerError::new("source went away"))
///     } else {
///         Ok((n + 1, Step::Yielded(n)))
///     }
/// });
/// assert_eq!(seq.advance(), Step::Yielded(0));
/// assert_eq!(seq.advance(), Step::Yielded(1));
/// assert!(seq.advance().unwrap_complete().is_err());
/// ```
pub fn try_unfold<St, T, R, E, F>(state: St, step: F) -> TryUnfold<St, F, R, E>
where
    F: FnMut(St) -> Result<(St, Step<T, R>), E>,
{
    TryUnfold {
        state: UnfoldState::Live(state),
        step,
    }
}

/// Sequence created by [`try_unfold`].
pub struct TryUnfold<St, F, R, E> {
    state: UnfoldState<St, Result<R, E>>,
    step: F,
}

impl<St, T, R, E, F> Sequence for TryUnfold<St, F, R, E>
where
    F: FnMut(St) -> Result<(St, Step<T, R>), E>,
    R: Clone,
    E: Clone,
{
    type Item = T;
    type Return = Result<R, E>;

    fn advance(&mut self) -> Step<T, Result<R, E>> {
        match self.state.take() {
            UnfoldState::Live(st) => match (self.step)(st) {
                Ok((next, Step::Yielded(v))) => {
                    self.state = UnfoldState::Live(next);
                    Step::Yielded(v)
                }
                Ok((_, Step::Complete(r))) => {
                    self.state = UnfoldState::Finished(Ok(r.clone()));
                    Step::Complete(Ok(r))
                }
                Err(e) => {
                    self.state = UnfoldState::Finished(Err(e.clone()));
                    Step::Complete(Err(e))
                }
            },
            UnfoldState::Finished(r) => {
                self.state = UnfoldState::Finished(r.clone());
                Step::Complete(r)
            }
            UnfoldState::Invalid => panic!("sequence advanced after its step function panicked"),
        }
    }
}

/// Create a sequence directly from a closure.
///
/// The closure is responsible for its own cursor state; unlike [`unfold`],
/// nothing enforces idempotent termination here, so the closure must keep
/// reporting `Complete` once it has completed. Use
/// [`strict`](crate::strict::strict) to police hand-written closures.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut seq = from_fn(move || {
///     n += 1;
///     if n <= 2 { Step::Yielded(n) } else { Step::Complete(()) }
/// });
/// assert_eq!(seq.advance(), Step::Yielded(1));
/// assert_eq!(seq.advance(), Step::Yielded(2));
/// assert_eq!(seq.advance(), Step::Complete(()));
/// ```
pub fn from_fn<T, R, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T, R>,
{
    FromFn(f)
}

/// Sequence created by [`from_fn`].
pub struct FromFn<F>(F);

impl<T, R, F> Sequence for FromFn<F>
where
    F: FnMut() -> Step<T, R>,
{
    type Item = T;
    type Return = R;

    fn advance(&mut self) -> Step<T, R> {
        (self.0)()
    }
}

/// A sequence yielding a single value, then completing.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once("hi");
/// assert_eq!(seq.advance(), Step::Yielded("hi"));
/// assert_eq!(seq.advance(), Step::Complete(()));
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

/// Sequence created by [`once`].
pub struct Once<T>(Option<T>);

impl<T> Sequence for Once<T> {
    type Item = T;
    type Return = ();

    fn advance(&mut self) -> Step<T, ()> {
        match self.0.take() {
            Some(v) => Step::Yielded(v),
            None => Step::Complete(()),
        }
    }
}

/// An infinite sequence calling a closure for every value.
///
/// Never completes on its own; the consumer stops it (via `take` on the
/// iterator bridge, or by abandoning it).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = repeat_with(|| 7);
/// assert_eq!(seq.advance(), Step::Yielded(7));
/// assert_eq!(seq.advance(), Step::Yielded(7));
/// ```
pub fn repeat_with<T, F>(f: F) -> RepeatWith<F>
where
    F: FnMut() -> T,
{
    RepeatWith(f)
}

/// Sequence created by [`repeat_with`].
pub struct RepeatWith<F>(F);

impl<T, F> Sequence for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;
    type Return = ();

    fn advance(&mut self) -> Step<T, ()> {
        Step::Yielded((self.0)())
    }
}

/// A sequence that is complete from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(std::marker::PhantomData)
}

/// Sequence created by [`empty`].
pub struct Empty<T>(std::marker::PhantomData<T>);

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Return = ();

    fn advance(&mut self) -> Step<T, ()> {
        Step::Complete(())
    }
}

/// Wrap any [`IntoIterator`] as a sequence with a unit return payload.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = from_iter([10, 20]);
/// assert_eq!(seq.advance(), Step::Yielded(10));
/// assert_eq!(seq.advance(), Step::Yielded(20));
/// assert_eq!(seq.advance(), Step::Complete(()));
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iter.into_iter())
}

/// Sequence created by [`from_iter`].
pub struct FromIter<I>(I);

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Return = ();

    fn advance(&mut self) -> Step<I::Item, ()> {
        match self.0.next() {
            Some(v) => Step::Yielded(v),
            None => Step::Complete(()),
        }
    }
}
