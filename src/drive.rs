//! Consumer-side driving loops.
//!
//! A driver repeatedly advances a sequence, hands each yielded value to a
//! callback, and stops on the terminal step. On completion the driver calls
//! `close()` so the sequence releases whatever it still holds.

use tracing::trace;

use crate::{asyncseq::AsyncSequence, sequence::Sequence, step::Step};

/// Drive a synchronous sequence to completion.
///
/// Returns the terminal payload.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seen = Vec::new();
/// for_each(from_iter([1, 2, 3]), |v| seen.push(v));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn for_each<S, F>(mut seq: S, mut on_value: F) -> S::Return
where
    S: Sequence,
    F: FnMut(S::Item),
{
    loop {
        match seq.advance() {
            Step::Yielded(v) => on_value(v),
            Step::Complete(r) => {
                trace!("sequence complete");
                seq.close();
                return r;
            }
        }
    }
}

/// Drive an async sequence to completion, awaiting each advance.
///
/// The returned future resolves right after the terminal advance.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let seq = unfold_async(0u32, |n| async move {
///     if n >= 3 { (n, Step::Complete(())) } else { (n + 1, Step::Yielded(n)) }
/// });
/// let mut seen = Vec::new();
/// for_each_async(seq, |v| seen.push(v)).await;
/// assert_eq!(seen, vec![0, 1, 2]);
/// # });
/// ```
pub async fn for_each_async<S, F>(mut seq: S, mut on_value: F) -> S::Return
where
    S: AsyncSequence,
    F: FnMut(S::Item),
{
    loop {
        match seq.advance().await {
            Step::Yielded(v) => on_value(v),
            Step::Complete(r) => {
                trace!("async sequence complete");
                seq.close();
                return r;
            }
        }
    }
}

/// Drain a sequence into a `Vec`, returning the values and the terminal
/// payload together.
pub fn collect<S>(seq: S) -> (Vec<S::Item>, S::Return)
where
    S: Sequence,
{
    let mut values = Vec::new();
    let ret = for_each(seq, |v| values.push(v));
    (values, ret)
}

/// Async counterpart of [`collect`].
pub async fn collect_async<S>(seq: S) -> (Vec<S::Item>, S::Return)
where
    S: AsyncSequence,
{
    let mut values = Vec::new();
    let ret = for_each_async(seq, |v| values.push(v)).await;
    (values, ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asyncseq::unfold_async;
    use crate::build::{from_iter, try_unfold, unfold};
    use crate::error::ProducerError;
    use std::time::Duration;
    use tokio::time::sleep;

    #[test]
    fn test_for_each_visits_in_order_and_returns_payload() {
        let seq = unfold(0u32, |n| {
            if n >= 3 {
                (n, Step::Complete("end"))
            } else {
                (n + 1, Step::Yielded(n * 10))
            }
        });
        let mut seen = Vec::new();
        let ret = for_each(seq, |v| seen.push(v));
        assert_eq!(seen, vec![0, 10, 20]);
        assert_eq!(ret, "end");
    }

    #[test]
    fn test_for_each_propagates_producer_failure() {
        let seq = try_unfold(0u32, |n| -> Result<(u32, Step<u32>), ProducerError> {
            if n >= 1 {
                Err(ProducerError::new("gone"))
            } else {
                Ok((n + 1, Step::Yielded(n)))
            }
        });
        let mut seen = Vec::new();
        let ret = for_each(seq, |v| seen.push(v));
        assert_eq!(seen, vec![0]);
        assert!(ret.is_err());
    }

    #[test]
    fn test_collect() {
        let (values, ()) = collect(from_iter(["x", "y"]));
        assert_eq!(values, vec!["x", "y"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_for_each_async_counts_to_bound() {
        let seq = unfold_async(0u32, |n| async move {
            sleep(Duration::from_millis(50)).await;
            if n >= 3 {
                (n, Step::Complete(()))
            } else {
                (n + 1, Step::Yielded(n))
            }
        });
        let mut seen = Vec::new();
        for_each_async(seq, |v| seen.push(v)).await;
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_collect_async_returns_payload() {
        let seq = unfold_async(10u32, |n| async move {
            if n >= 12 {
                (n, Step::Complete(n))
            } else {
                (n + 1, Step::Yielded(n))
            }
        });
        let (values, ret) = collect_async(seq).await;
        assert_eq!(values, vec![10, 11]);
        assert_eq!(ret, 12);
    }
}
