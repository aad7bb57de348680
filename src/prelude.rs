//! Commonly used imports.
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{AsyncSequence, IntoSequence, Sequence, Step};

// Most common constructors
pub use crate::build::{empty, from_fn, from_iter, once, repeat_with, try_unfold, unfold};
pub use crate::asyncseq::unfold_async;

// Composition
pub use crate::compose::chain;
pub use crate::delegate::delegate;

// Driving
pub use crate::drive::{collect, collect_async, for_each, for_each_async};

// Checked advancing and errors
pub use crate::error::{ProducerError, ProtocolError};
pub use crate::strict::strict;

// Illustrative producers
pub use crate::producers::{aging, fetch_n, loop_counter, squares};
