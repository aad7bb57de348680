//! Illustrative producers built on the engine.
//!
//! Everything here is ordinary [`unfold`]/[`unfold_async`] usage. The async
//! producers take their delay and fetch effects as closures
//! (`after() -> Future<()>`, `fetch() -> Future<T>`), so they run against a
//! real clock, a paused test clock, or a stub fetcher without changes.

use std::future::Future;

use crate::{
    Sequence,
    asyncseq::{AsyncSequence, unfold_async},
    build::unfold,
    step::Step,
};

/// The squares below a bound, zero-indexed: `0, 1, 4, ...` for `n < max`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (values, ()) = collect(squares(3));
/// assert_eq!(values, vec![0, 1, 4]);
/// ```
pub fn squares(max: u64) -> impl Sequence<Item = u64, Return = ()> {
    unfold(0u64, move |n| {
        if n >= max {
            (n, Step::Complete(()))
        } else {
            (n + 1, Step::Yielded(n * n))
        }
    })
}

/// A wrapping counter: yields `counter % loop_size` for `max_iteration`
/// steps, then completes with the raw counter as terminal payload.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (values, total) = collect(loop_counter(3, 7));
/// assert_eq!(values, vec![0, 1, 2, 0, 1, 2, 0]);
/// assert_eq!(total, 7);
/// ```
pub fn loop_counter(
    loop_size: u64,
    max_iteration: u64,
) -> impl Sequence<Item = u64, Return = u64> {
    unfold(0u64, move |counter| {
        if counter >= max_iteration {
            (counter, Step::Complete(counter))
        } else {
            (counter + 1, Step::Yielded(counter % loop_size))
        }
    })
}

/// A person growing one year per step, waiting out the injected delay each
/// time; completes once the age would exceed `lifespan`.
pub fn aging<F, Fut>(
    age: u32,
    lifespan: u32,
    mut after: F,
) -> impl AsyncSequence<Item = u32, Return = ()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    unfold_async(age, move |current| {
        let wait = after();
        async move {
            wait.await;
            let next = current + 1;
            if next > lifespan {
                (next, Step::Complete(()))
            } else {
                (next, Step::Yielded(next))
            }
        }
    })
}

/// Pull `total` items from an injected fetch effect, one per advance.
///
/// The effect is only invoked for advances that will yield; the terminal
/// probe resolves without touching it.
pub fn fetch_n<T, F, Fut>(total: u32, mut fetch: F) -> impl AsyncSequence<Item = T, Return = ()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = T>,
{
    unfold_async(0u32, move |count| {
        let pending = (count < total).then(&mut fetch);
        async move {
            match pending {
                Some(fut) => {
                    let item = fut.await;
                    (count + 1, Step::Yielded(item))
                }
                None => (count, Step::Complete(())),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::{collect, collect_async};
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    #[test]
    fn test_squares_zero_indexed_bound() {
        let (values, ()) = collect(squares(3));
        assert_eq!(values, vec![0, 1, 4]);

        let (values, ()) = collect(squares(0));
        assert!(values.is_empty());
    }

    #[test]
    fn test_loop_counter_wraps_and_returns_total() {
        let (values, total) = collect(loop_counter(3, 6));
        assert_eq!(values, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(total, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aging_counts_years_through_the_delay() {
        let start = Instant::now();
        let seq = aging(7, 11, || sleep(Duration::from_millis(200)));
        let (ages, ()) = collect_async(seq).await;
        assert_eq!(ages, vec![8, 9, 10, 11]);
        // four yields plus the terminal probe, each behind one delay
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_aging_closes_early() {
        let mut seq = aging(0, 100, || sleep(Duration::from_millis(10)));
        assert_eq!(seq.advance().await, Step::Yielded(1));
        seq.close();
        assert_eq!(seq.advance().await, Step::Complete(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_n_pulls_from_the_injected_effect() {
        let mut served = 0u32;
        let seq = fetch_n(3, move || {
            served += 1;
            let item = format!("item-{served}");
            async move {
                sleep(Duration::from_millis(30)).await;
                item
            }
        });
        let (items, ()) = collect_async(seq).await;
        assert_eq!(items, vec!["item-1", "item-2", "item-3"]);
    }
}
