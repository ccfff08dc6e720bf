//! Waiting on two channels at once.
//!
//! [`select2_recv`] blocks until either channel yields a value or reports
//! that it closed. When both are ready, which one wins is random.
//!
//! ```rust
//! use tour_channel::{bounded, select2_recv, Select2Result};
//!
//! let (numbers_tx, numbers) = bounded::<u8>(1);
//! let (_words_tx, words) = bounded::<&str>(1);
//! numbers_tx.send(3).unwrap();
//!
//! assert_eq!(select2_recv(&numbers, &words), Select2Result::First(3));
//! ```

use crate::RecvChan;

/// Which of the two channels fired, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Select2Result<A, B> {
    First(A),
    Second(B),
    /// The first channel is closed and drained.
    FirstClosed,
    /// The second channel is closed and drained.
    SecondClosed,
}

impl<A, B> Select2Result<A, B> {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::FirstClosed | Self::SecondClosed)
    }
}

pub fn select2_recv<A, B>(first: &RecvChan<A>, second: &RecvChan<B>) -> Select2Result<A, B> {
    crossbeam_channel::select! {
        recv(first.raw()) -> got => got.map_or(Select2Result::FirstClosed, Select2Result::First),
        recv(second.raw()) -> got => got.map_or(Select2Result::SecondClosed, Select2Result::Second),
    }
}
