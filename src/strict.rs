//! Fail-fast advancing for debugging and tests.
//!
//! The relaxed contract re-emits the terminal step forever. When a consumer
//! would rather crash than silently spin on a finished sequence, [`strict`]
//! wraps it so that advancing past completion (or after [`Strict::close`])
//! reports a [`ProtocolError`] instead.

use crate::{Sequence, Step, error::ProtocolError};

/// Wrap a sequence so protocol misuse fails fast.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = strict(once(5));
/// assert_eq!(seq.try_advance(), Ok(Step::Yielded(5)));
/// assert!(seq.try_advance().unwrap().is_complete());
/// assert_eq!(seq.try_advance(), Err(ProtocolError::AdvanceAfterDone));
/// ```
pub fn strict<S>(seq: S) -> Strict<S>
where
    S: Sequence,
{
    Strict {
        state: StrictState::Active(seq),
    }
}

enum StrictState<S> {
    Active(S),
    Done,
    Closed,
}

/// Checked wrapper created by [`strict`].
pub struct Strict<S> {
    state: StrictState<S>,
}

impl<S> Strict<S>
where
    S: Sequence,
{
    /// Advance, erroring instead of re-emitting a terminal step.
    pub fn try_advance(&mut self) -> Result<Step<S::Item, S::Return>, ProtocolError> {
        match &mut self.state {
            StrictState::Active(seq) => {
                let step = seq.advance();
                if step.is_complete() {
                    if let StrictState::Active(mut seq) =
                        std::mem::replace(&mut self.state, StrictState::Done)
                    {
                        seq.close();
                    }
                }
                Ok(step)
            }
            StrictState::Done => Err(ProtocolError::AdvanceAfterDone),
            StrictState::Closed => Err(ProtocolError::AdvanceAfterClose),
        }
    }

    /// Close the underlying sequence; later advances error out.
    pub fn close(&mut self) {
        if let StrictState::Active(mut seq) =
            std::mem::replace(&mut self.state, StrictState::Closed)
        {
            seq.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, once};

    #[test]
    fn test_advance_past_done_errors() {
        let mut seq = strict(from_iter([1]));
        assert_eq!(seq.try_advance(), Ok(Step::Yielded(1)));
        assert_eq!(seq.try_advance(), Ok(Step::Complete(())));
        assert_eq!(seq.try_advance(), Err(ProtocolError::AdvanceAfterDone));
        assert_eq!(seq.try_advance(), Err(ProtocolError::AdvanceAfterDone));
    }

    #[test]
    fn test_advance_after_close_errors() {
        let mut seq = strict(once(1));
        seq.close();
        assert_eq!(seq.try_advance(), Err(ProtocolError::AdvanceAfterClose));
    }

    #[test]
    fn test_close_after_done_reports_close() {
        let mut seq = strict(once(1));
        let _ = seq.try_advance();
        let _ = seq.try_advance();
        // explicit close takes precedence over the earlier completion
        seq.close();
        assert_eq!(seq.try_advance(), Err(ProtocolError::AdvanceAfterClose));
    }
}
