//! Transparent delegation across an ordered list of child sequences.
//!
//! The `yield*` pattern: a delegating sequence forwards every non-terminal
//! step of the current child, then moves on to the next child as soon as the
//! current one completes, without handing an empty turn back to the consumer.

use crate::{Sequence, Step};

/// Delegate to each child sequence in order.
///
/// Child terminal steps are consumed inside the advance loop; the consumer
/// sees one continuous series. The delegating sequence's own terminal step
/// carries the last child's return payload (`None` for an empty child list,
/// and as the explicit no-value marker on advances past the first terminal
/// step).
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // gen2-style composition: 1, then the inner sequence, then 4
/// let seq = delegate(vec![
///     once(1).boxed(),
///     from_iter([2, 3]).boxed(),
///     once(4).boxed(),
/// ]);
/// let (values, _) = collect(seq);
/// assert_eq!(values, vec![1, 2, 3, 4]);
/// ```
pub fn delegate<S>(children: Vec<S>) -> Delegate<S>
where
    S: Sequence,
{
    Delegate {
        children,
        index: 0,
        last_return: None,
    }
}

/// Sequence created by [`delegate`].
pub struct Delegate<S: Sequence> {
    children: Vec<S>,
    index: usize,
    last_return: Option<S::Return>,
}

impl<S> Sequence for Delegate<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Return = Option<S::Return>;

    fn advance(&mut self) -> Step<S::Item, Self::Return> {
        loop {
            match self.children.get_mut(self.index) {
                Some(child) => match child.advance() {
                    Step::Yielded(v) => return Step::Yielded(v),
                    Step::Complete(r) => {
                        // no empty turn on the child boundary; the exhausted
                        // child is closed before the cursor moves past it
                        child.close();
                        self.last_return = Some(r);
                        self.index += 1;
                    }
                },
                None => return Step::Complete(self.last_return.take()),
            }
        }
    }

    fn close(&mut self) {
        // children before the cursor are already exhausted
        for child in self.children.iter_mut().skip(self.index) {
            child.close();
        }
    }
}
