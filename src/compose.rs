//! Composition adapters: chaining and step transformations.

use crate::{Sequence, Step};

/// Run the first sequence to completion, then continue with the second.
///
/// The first sequence's terminal payload is discarded; the chain completes
/// with the second sequence's payload. The switch happens inside a single
/// `advance` call, so the consumer sees one continuous series.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain(Some(first), second)
}

/// Two sequences run back to back.
///
/// Created via [`chain`] or [`Sequence::chain`]. The first sequence is
/// dropped from memory once it completes.
pub struct Chain<A, B>(Option<A>, B);

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = B::Item;
    type Return = B::Return;

    fn advance(&mut self) -> Step<Self::Item, Self::Return> {
        match self.0 {
            Some(ref mut first) => match first.advance() {
                Step::Yielded(v) => Step::Yielded(v),
                Step::Complete(_) => {
                    self.0 = None; // drop the exhausted sequence
                    self.1.advance()
                }
            },
            None => self.1.advance(),
        }
    }

    fn close(&mut self) {
        if let Some(first) = &mut self.0 {
            first.close();
        }
        self.1.close();
    }
}

/// Transform yielded values with a closure.
pub fn map<S, T2, F>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> T2,
{
    Map(seq, f)
}

/// Sequence adapter applying a closure to every yielded value.
pub struct Map<S, F>(S, F);

impl<S, T2, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> T2,
{
    type Item = T2;
    type Return = S::Return;

    fn advance(&mut self) -> Step<T2, S::Return> {
        self.0.advance().map_yielded(&mut self.1)
    }

    fn close(&mut self) {
        self.0.close()
    }
}

/// Transform the terminal payload with a closure.
pub fn map_return<S, R2, F>(seq: S, f: F) -> MapReturn<S, F>
where
    S: Sequence,
    F: FnMut(S::Return) -> R2,
{
    MapReturn(seq, f)
}

/// Sequence adapter applying a closure to the terminal payload.
pub struct MapReturn<S, F>(S, F);

impl<S, R2, F> Sequence for MapReturn<S, F>
where
    S: Sequence,
    F: FnMut(S::Return) -> R2,
{
    type Item = S::Item;
    type Return = R2;

    fn advance(&mut self) -> Step<S::Item, R2> {
        self.0.advance().map_complete(&mut self.1)
    }

    fn close(&mut self) {
        self.0.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, once};

    #[test]
    fn test_chain_consumes_first_terminal_silently() {
        let mut seq = chain(from_iter([1, 2]), from_iter([3, 4]));
        assert_eq!(seq.advance(), Step::Yielded(1));
        assert_eq!(seq.advance(), Step::Yielded(2));
        // the boundary step already comes from the second sequence
        assert_eq!(seq.advance(), Step::Yielded(3));
        assert_eq!(seq.advance(), Step::Yielded(4));
        assert_eq!(seq.advance(), Step::Complete(()));
    }

    #[test]
    fn test_chain_with_empty_first() {
        let mut seq = chain(from_iter(std::iter::empty::<i32>()), once(9));
        assert_eq!(seq.advance(), Step::Yielded(9));
        assert_eq!(seq.advance(), Step::Complete(()));
    }

    #[test]
    fn test_chain_idempotent_after_completion() {
        let mut seq = chain(once(1), once(2));
        assert_eq!(seq.advance(), Step::Yielded(1));
        assert_eq!(seq.advance(), Step::Yielded(2));
        assert_eq!(seq.advance(), Step::Complete(()));
        assert_eq!(seq.advance(), Step::Complete(()));
    }

    #[test]
    fn test_map_return_composes_with_map() {
        let mut seq = map(map_return(from_iter([1, 2]), |()| "end"), |v| v + 100);
        assert_eq!(seq.advance(), Step::Yielded(101));
        assert_eq!(seq.advance(), Step::Yielded(102));
        assert_eq!(seq.advance(), Step::Complete("end"));
    }
}
