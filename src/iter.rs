//! Bridges between sequences and standard iterators.
//!
//! [`SequenceIter`] drives a [`Sequence`] through the [`Iterator`] protocol,
//! keeping the terminal payload accessible after the loop. The reverse
//! bridge, [`from_iter`](crate::build::from_iter), lives with the other
//! constructors. [`IntoSequence`] is the "provides iteration" contract: a
//! type that can hand out a fresh cursor implements it, and every sequence
//! trivially provides itself.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = from_iter([10, 20]).into_iter();
//! let values: Vec<_> = iter.by_ref().collect();
//! assert_eq!(values, vec![10, 20]);
//! assert_eq!(iter.into_return(), Some(()));
//! ```

use crate::{Sequence, Step};

/// The contract for types that provide iteration: a stable method returning
/// a fresh cursor.
///
/// Every [`Sequence`] provides itself (the self-reference pattern), so
/// consumers can be written against `IntoSequence` and accept both finished
/// sequence values and dedicated source types.
pub trait IntoSequence {
    type Item;
    type Return;
    type IntoSeq: Sequence<Item = Self::Item, Return = Self::Return>;

    fn into_sequence(self) -> Self::IntoSeq;
}

impl<S> IntoSequence for S
where
    S: Sequence,
{
    type Item = S::Item;
    type Return = S::Return;
    type IntoSeq = S;

    fn into_sequence(self) -> S {
        self
    }
}

/// Iterator over the yielded values of a sequence.
///
/// Created via [`Sequence::into_iter`]. Yields until the sequence completes;
/// the terminal payload is then available through [`into_return`]
/// (consuming) or [`return_value`] (borrowing).
///
/// [`into_return`]: SequenceIter::into_return
/// [`return_value`]: SequenceIter::return_value
pub struct SequenceIter<S>
where
    S: Sequence,
{
    state: IterState<S>,
}

enum IterState<S>
where
    S: Sequence,
{
    Active(S),
    Complete(S::Return),
    Invalid,
}

impl<S> IterState<S>
where
    S: Sequence,
{
    fn take(&mut self) -> Self {
        std::mem::replace(self, IterState::Invalid)
    }
}

impl<S> SequenceIter<S>
where
    S: Sequence,
{
    pub fn new(seq: S) -> Self {
        Self {
            state: IterState::Active(seq),
        }
    }

    /// Check whether the underlying sequence has completed.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, IterState::Complete(_))
    }

    /// Consume the iterator, returning the terminal payload if the sequence
    /// completed.
    pub fn into_return(self) -> Option<S::Return> {
        match self.state {
            IterState::Complete(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the terminal payload if the sequence completed.
    pub fn return_value(&self) -> Option<&S::Return> {
        match &self.state {
            IterState::Complete(r) => Some(r),
            _ => None,
        }
    }
}

impl<S> Iterator for SequenceIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match self.state.take() {
            IterState::Active(mut seq) => match seq.advance() {
                Step::Yielded(v) => {
                    self.state = IterState::Active(seq);
                    Some(v)
                }
                Step::Complete(r) => {
                    seq.close();
                    self.state = IterState::Complete(r);
                    None
                }
            },
            IterState::Complete(r) => {
                self.state = IterState::Complete(r);
                None
            }
            IterState::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, once, repeat_with, unfold};

    #[test]
    fn test_iter_once() {
        let mut iter = once(42).into_iter();
        assert_eq!(iter.next(), Some(42));
        assert_eq!(iter.next(), None);
        assert!(iter.is_complete());
        assert_eq!(iter.into_return(), Some(()));
    }

    #[test]
    fn test_take_on_infinite_sequence() {
        let mut iter = repeat_with(|| 9).into_iter();
        let values: Vec<_> = (&mut iter).take(4).collect();
        assert_eq!(values, vec![9, 9, 9, 9]);
        // never completed, so there is no return value
        assert!(!iter.is_complete());
        assert_eq!(iter.return_value(), None);
    }

    #[test]
    fn test_for_loop_over_sequence() {
        let mut values = Vec::new();
        for v in from_iter([1, 2, 3]).into_iter() {
            values.push(v);
        }
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_return_value_after_drain() {
        let seq = unfold(0u32, |n| {
            if n >= 2 {
                (n, Step::Complete("finished"))
            } else {
                (n + 1, Step::Yielded(n))
            }
        });
        let mut iter = seq.into_iter();
        assert_eq!(iter.return_value(), None);
        let _: Vec<_> = iter.by_ref().collect();
        assert_eq!(iter.return_value(), Some(&"finished"));
        assert_eq!(iter.into_return(), Some("finished"));
    }

    #[test]
    fn test_into_sequence_self_reference() {
        let seq = from_iter([5]);
        // a sequence asked for its cursor hands back itself
        let mut cursor = seq.into_sequence();
        assert_eq!(cursor.advance(), Step::Yielded(5));
    }

    #[test]
    fn test_exhausted_iter_stays_exhausted() {
        let mut iter = from_iter([1]).into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
