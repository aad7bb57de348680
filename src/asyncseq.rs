//! Sequences whose advance suspends before producing a step.
//!
//! An [`AsyncSequence`] is driven exactly like a [`Sequence`](crate::Sequence)
//! except that `advance` is a future: the producer may await a timer or an
//! external call before resolving. The await inside `advance` is the only
//! suspension point; `advance` takes `&mut self`, so a second advance cannot
//! start while one is in flight on the same instance.
//!
//! [`unfold_async`] builds an async sequence from seed state and an async
//! step function, wired to a stop signal: [`AsyncUnfold::close_handle`]
//! returns a clonable [`CloseHandle`] whose `close()` resolves a pending
//! advance to `Complete` promptly and drops the producer's in-flight future,
//! releasing any timer it had registered.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::step::Step;

/// A pull-based producer whose advance operation suspends.
///
/// Callers must await one step before requesting the next; dropping an
/// in-flight `advance` future mid-await leaves the sequence in an
/// unspecified state.
pub trait AsyncSequence {
    /// Type of the yielded values.
    type Item;

    /// Type of the final payload carried by the terminal step.
    type Return;

    /// Advance the cursor by one step, suspending until the producer
    /// resolves.
    fn advance(&mut self) -> impl Future<Output = Step<Self::Item, Self::Return>>;

    /// Stop the sequence: no further non-terminal steps are produced and
    /// held resources are released.
    fn close(&mut self) {}
}

impl<S> AsyncSequence for &'_ mut S
where
    S: AsyncSequence,
{
    type Item = S::Item;
    type Return = S::Return;

    async fn advance(&mut self) -> Step<S::Item, S::Return> {
        (**self).advance().await
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Create an async sequence from an initial state and an async step function.
///
/// The step function receives the current state and resolves to the next
/// state together with the step to report. Delays and external calls belong
/// inside the returned future, injected by the caller, so the engine itself
/// carries no timer or network dependency.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut seq = unfold_async(0u32, |n| async move {
///     if n >= 3 {
///         (n, Step::Complete(()))
///     } else {
///         (n + 1, Step::Yielded(n))
///     }
/// });
/// assert_eq!(seq.advance().await, Step::Yielded(0));
/// assert_eq!(seq.advance().await, Step::Yielded(1));
/// assert_eq!(seq.advance().await, Step::Yielded(2));
/// assert_eq!(seq.advance().await, Step::Complete(()));
/// # });
/// ```
pub fn unfold_async<St, T, R, F, Fut>(state: St, step: F) -> AsyncUnfold<St, F, R>
where
    F: FnMut(St) -> Fut,
    Fut: Future<Output = (St, Step<T, R>)>,
{
    AsyncUnfold {
        state: AsyncUnfoldState::Live(state),
        step,
        started: false,
        stop: CancellationToken::new(),
    }
}

enum AsyncUnfoldState<St, R> {
    Live(St),
    Finished(R),
    Closed,
    /// Transient marker; observable only after a panic or after an advance
    /// future was dropped mid-await.
    Invalid,
}

impl<St, R> AsyncUnfoldState<St, R> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, AsyncUnfoldState::Invalid)
    }
}

/// Async sequence created by [`unfold_async`].
pub struct AsyncUnfold<St, F, R> {
    state: AsyncUnfoldState<St, R>,
    step: F,
    started: bool,
    stop: CancellationToken,
}

impl<St, F, R> AsyncUnfold<St, F, R> {
    /// A clonable handle that closes this sequence from outside, even while
    /// an advance is pending.
    pub fn close_handle(&self) -> CloseHandle {
        CloseHandle(self.stop.clone())
    }
}

impl<St, T, R, F, Fut> AsyncSequence for AsyncUnfold<St, F, R>
where
    F: FnMut(St) -> Fut,
    Fut: Future<Output = (St, Step<T, R>)>,
    R: Clone + Default,
{
    type Item = T;
    type Return = R;

    async fn advance(&mut self) -> Step<T, R> {
        self.started = true;
        match self.state.take() {
            AsyncUnfoldState::Live(st) => {
                if self.stop.is_cancelled() {
                    self.state = AsyncUnfoldState::Closed;
                    return Step::Complete(R::default());
                }
                let in_flight = (self.step)(st);
                tokio::select! {
                    biased;

                    _ = self.stop.cancelled() => {
                        // `in_flight` is dropped here, and with it any timer
                        // or pending request the producer registered
                        self.state = AsyncUnfoldState::Closed;
                        debug!("pending advance resolved by close");
                        Step::Complete(R::default())
                    }

                    (next, step) = in_flight => match step {
                        Step::Yielded(v) => {
                            self.state = AsyncUnfoldState::Live(next);
                            Step::Yielded(v)
                        }
                        Step::Complete(r) => {
                            self.state = AsyncUnfoldState::Finished(r.clone());
                            Step::Complete(r)
                        }
                    },
                }
            }
            AsyncUnfoldState::Finished(r) => {
                self.state = AsyncUnfoldState::Finished(r.clone());
                Step::Complete(r)
            }
            AsyncUnfoldState::Closed => {
                self.state = AsyncUnfoldState::Closed;
                Step::Complete(R::default())
            }
            AsyncUnfoldState::Invalid => {
                panic!("async sequence advanced after a dropped or panicked advance")
            }
        }
    }

    fn close(&mut self) {
        self.stop.cancel();
    }
}

impl<St, F, R> Drop for AsyncUnfold<St, F, R> {
    fn drop(&mut self) {
        // abandoned mid-stream without close: reportable leak, not an error
        if self.started
            && matches!(self.state, AsyncUnfoldState::Live(_))
            && !self.stop.is_cancelled()
        {
            warn!("async sequence dropped mid-stream without close");
        }
    }
}

/// Clonable stop signal for an [`AsyncUnfold`].
///
/// Closing makes the pending advance (and every later one) resolve with a
/// terminal step promptly, without waiting out the producer's delay.
#[derive(Clone)]
pub struct CloseHandle(CancellationToken);

impl CloseHandle {
    pub fn close(&self) {
        self.0.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.0.is_cancelled()
    }
}
