//! Error types for producer failures and protocol misuse.

use thiserror::Error;

/// A step function failed.
///
/// Surfaces on the advancing caller through the terminal step of a fallible
/// sequence (see [`try_unfold`](crate::build::try_unfold)); it is never
/// swallowed and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("producer failed: {0}")]
pub struct ProducerError(String);

impl ProducerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The caller broke the advance protocol.
///
/// Overlapping advances on a single instance are already unrepresentable
/// (`advance` takes `&mut self`), so the remaining violations are advancing a
/// sequence that has reported completion, or advancing after an explicit
/// close. The [`Strict`](crate::strict::Strict) wrapper turns both into a
/// loud, immediate error instead of a silently re-emitted terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("advance called after the sequence reported completion")]
    AdvanceAfterDone,
    #[error("advance called after close")]
    AdvanceAfterClose,
}
