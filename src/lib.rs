//! # lazyseq: Pull-Based Lazy Sequences
//!
//! An interruptible, pull-based computation that can be driven synchronously
//! or asynchronously, composed by delegation, and terminated early.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: owns its cursor state; each [`advance`](Sequence::advance)
//!   yields a value or completes with a final payload
//! - **[`AsyncSequence`]**: same contract, but `advance` suspends until the
//!   producer resolves
//!
//! ## Key Features
//!
//! - **Composable**: chain sequences with `.chain()`, or
//!   [`delegate`](delegate::delegate) across an ordered list of children as
//!   one continuous series
//! - **Idempotent termination**: once complete, a sequence stays complete
//! - **Early close**: a [`CloseHandle`] resolves a pending async advance
//!   promptly and releases the producer's timer
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // lazily computed squares below a bound
//! let seq = unfold(0u64, |n| {
//!     if n >= 3 {
//!         (n, Step::Complete(()))
//!     } else {
//!         (n + 1, Step::Yielded(n * n))
//!     }
//! });
//!
//! let mut values = Vec::new();
//! for_each(seq, |v| values.push(v));
//! assert_eq!(values, vec![0, 1, 4]);
//! ```
//!
//! ## Common Functions
//!
//! **Building sequences:**
//! - [`unfold(state, f)`](build::unfold) / [`try_unfold(state, f)`](build::try_unfold)
//! - [`unfold_async(state, f)`](asyncseq::unfold_async)
//! - [`once(v)`](build::once), [`repeat_with(f)`](build::repeat_with),
//!   [`from_iter(i)`](build::from_iter), [`from_fn(f)`](build::from_fn)
//! - [`delegate(children)`](delegate::delegate)
//!
//! **Driving:**
//! - [`for_each(seq, on_value)`](drive::for_each)
//! - [`for_each_async(seq, on_value)`](drive::for_each_async)

pub mod asyncseq;
pub mod build;
pub mod compose;
pub mod delegate;
pub mod drive;
pub mod error;
pub mod iter;
pub mod prelude;
pub mod producers;
pub mod sequence;
pub mod step;
pub mod strict;

pub use asyncseq::{AsyncSequence, AsyncUnfold, CloseHandle, unfold_async};
pub use build::{empty, from_fn, from_iter, once, repeat_with, try_unfold, unfold};
pub use compose::{Chain, Map, MapReturn, chain};
pub use delegate::{Delegate, delegate};
pub use drive::{collect, collect_async, for_each, for_each_async};
pub use error::{ProducerError, ProtocolError};
pub use iter::{IntoSequence, SequenceIter};
pub use sequence::Sequence;
pub use step::Step;
pub use strict::{Strict, strict};
