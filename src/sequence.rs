//! Core trait for pull-based lazy sequences.
//!
//! This module defines the [`Sequence`] trait, the fundamental building block
//! of this library. A [`Sequence`] owns its cursor state and hands out one
//! [`Step`] per [`advance`](Sequence::advance) call: either a yielded value or
//! a terminal return payload.
//!
//! # The Sequence Trait
//!
//! A `Sequence` with `Item = T` and `Return = R`:
//! - yields intermediate values of type `T`
//! - eventually completes with a final payload of type `R`
//! - once complete, keeps reporting completion on further advances
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = unfold(0u32, |n| {
//!     if n >= 3 {
//!         (n, Step::Complete(()))
//!     } else {
//!         (n + 1, Step::Yielded(n * n))
//!     }
//! });
//! assert_eq!(seq.advance(), Step::Yielded(0));
//! assert_eq!(seq.advance(), Step::Yielded(1));
//! assert_eq!(seq.advance(), Step::Yielded(4));
//! assert_eq!(seq.advance(), Step::Complete(()));
//! ```

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use crate::{
    compose::{Chain, Map, MapReturn, chain, map, map_return},
    iter::SequenceIter,
    step::Step,
};

/// A stateful, single-consumer producer of an ordered series of [`Step`]s.
///
/// Each call to [`advance`](Sequence::advance) mutates only this sequence's
/// private cursor state. `advance` takes `&mut self`, so two overlapping
/// advances on one instance cannot be expressed; under a single-threaded
/// caller the progression is deterministic with no skipped or duplicated
/// steps.
///
/// Once a sequence reports [`Step::Complete`], all further advances must
/// report `Complete` as well and must not panic. Every constructor in this
/// crate upholds that invariant; hand-written impls should too, or be policed
/// with [`strict`](crate::strict::strict).
pub trait Sequence {
    /// Type of the yielded values.
    type Item;

    /// Type of the final payload carried by the terminal step.
    type Return;

    /// Advance the cursor by one step.
    fn advance(&mut self) -> Step<Self::Item, Self::Return>;

    /// Release any resource the sequence still holds.
    ///
    /// Most synchronous sequences hold nothing, hence the default no-op.
    /// Drivers call this once after observing the terminal step, and
    /// consumers abandoning a sequence mid-stream should call it themselves.
    fn close(&mut self) {}

    /// Delegate to this sequence, then to `next` once this one completes.
    ///
    /// The first sequence's terminal step is consumed transparently: the
    /// consumer never observes an empty "switch" turn, and the chain's
    /// return payload is the second sequence's.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let seq = once(1).chain(once(2));
    /// let (values, _) = collect(seq);
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    fn chain<S>(self, next: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        chain(self, next)
    }

    /// Transform yielded values.
    fn map<T2, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> T2,
    {
        map(self, f)
    }

    /// Transform the final payload when completing.
    fn map_return<R2, F>(self, f: F) -> MapReturn<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Return) -> R2,
    {
        map_return(self, f)
    }

    /// Erase the concrete type behind a trait object.
    fn boxed(self) -> Box<dyn Sequence<Item = Self::Item, Return = Self::Return>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Bridge into a standard [`Iterator`] over the yielded values.
    ///
    /// The terminal payload stays accessible through
    /// [`SequenceIter::into_return`].
    fn into_iter(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }
}

impl<T, R> Sequence for Box<dyn Sequence<Item = T, Return = R>> {
    type Item = T;
    type Return = R;

    fn advance(&mut self) -> Step<T, R> {
        (**self).advance()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Return = S::Return;

    fn advance(&mut self) -> Step<S::Item, S::Return> {
        (**self).advance()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// `None` behaves as an already-finished sequence.
impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Return = Option<S::Return>;

    fn advance(&mut self) -> Step<S::Item, Self::Return> {
        match self {
            Some(s) => s.advance().map_complete(Some),
            None => Step::Complete(None),
        }
    }

    fn close(&mut self) {
        if let Some(s) = self {
            s.close()
        }
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item, Return = L::Return>,
{
    type Item = L::Item;
    type Return = L::Return;

    fn advance(&mut self) -> Step<L::Item, L::Return> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }

    fn close(&mut self) {
        match self {
            either::Either::Left(l) => l.close(),
            either::Either::Right(r) => r.close(),
        }
    }
}

impl<S> Sequence for Rc<RefCell<S>>
where
    S: Sequence,
{
    type Item = S::Item;
    type Return = S::Return;

    fn advance(&mut self) -> Step<S::Item, S::Return> {
        self.as_ref().borrow_mut().advance()
    }

    fn close(&mut self) {
        self.as_ref().borrow_mut().close()
    }
}

/// Moves the terminal payload behind a `Result` so a poisoned lock surfaces
/// on the advancing caller instead of panicking.
impl<S> Sequence for Arc<Mutex<S>>
where
    S: Sequence,
{
    type Item = S::Item;
    type Return = Result<S::Return, crate::error::ProducerError>;

    fn advance(&mut self) -> Step<S::Item, Self::Return> {
        match self.lock() {
            Ok(mut s) => s.advance().map_complete(Ok),
            Err(_) => Step::Complete(Err(crate::error::ProducerError::new("lock was poisoned"))),
        }
    }

    fn close(&mut self) {
        if let Ok(mut s) = self.lock() {
            s.close()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, once, unfold};
    use crate::drive::collect;

    #[test]
    fn test_chain_switches_after_first_completes() {
        let seq = from_iter([1, 2]).chain(from_iter([3]));
        let (values, _) = collect(seq);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_transforms_yields_only() {
        let mut seq = from_iter([1, 2]).map(|v| v * 10);
        assert_eq!(seq.advance(), Step::Yielded(10));
        assert_eq!(seq.advance(), Step::Yielded(20));
        assert_eq!(seq.advance(), Step::Complete(()));
    }

    #[test]
    fn test_map_return_applies_on_completion() {
        let mut seq = unfold(0u32, |n| {
            if n >= 2 {
                (n, Step::Complete(n))
            } else {
                (n + 1, Step::Yielded(n))
            }
        })
        .map_return(|r| format!("stopped at {r}"));

        assert_eq!(seq.advance(), Step::Yielded(0));
        assert_eq!(seq.advance(), Step::Yielded(1));
        assert_eq!(seq.advance(), Step::Complete("stopped at 2".to_string()));
    }

    #[test]
    fn test_boxed_preserves_progression() {
        let mut seq = once(7).boxed();
        assert_eq!(seq.advance(), Step::Yielded(7));
        assert_eq!(seq.advance(), Step::Complete(()));
        assert_eq!(seq.advance(), Step::Complete(()));
    }

    #[test]
    fn test_mut_ref_advances_underlying() {
        let mut seq = from_iter([1, 2, 3]);
        {
            let mut by_ref = &mut seq;
            assert_eq!(by_ref.advance(), Step::Yielded(1));
        }
        assert_eq!(seq.advance(), Step::Yielded(2));
    }

    #[test]
    fn test_none_is_already_finished() {
        let mut seq: Option<crate::build::Once<i32>> = None;
        assert_eq!(seq.advance(), Step::Complete(None));
    }

    #[test]
    fn test_either_dispatches() {
        let mut left: either::Either<_, crate::build::FromIter<std::vec::IntoIter<i32>>> =
            either::Either::Left(once(5));
        assert_eq!(left.advance(), Step::Yielded(5));
        assert_eq!(left.advance(), Step::Complete(()));
    }
}
