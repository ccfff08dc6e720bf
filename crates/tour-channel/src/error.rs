//! What a channel operation reports when it cannot complete.

use std::fmt;

use thiserror::Error;

/// Every receiver is gone. The rejected value is handed back.
#[derive(Clone, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SendError(..)")
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no receiver left on the channel")
    }
}

impl<T> std::error::Error for SendError<T> {}

/// A non-blocking send that could not go through.
#[derive(Clone, PartialEq, Eq)]
pub enum TrySendError<T> {
    /// No buffer slot free, or on an unbuffered channel no receiver waiting.
    Full(T),
    Disconnected(T),
}

impl<T> fmt::Debug for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => f.write_str("Full(..)"),
            TrySendError::Disconnected(_) => f.write_str("Disconnected(..)"),
        }
    }
}

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => f.write_str("channel has no free slot"),
            TrySendError::Disconnected(_) => f.write_str("no receiver left on the channel"),
        }
    }
}

impl<T> std::error::Error for TrySendError<T> {}

impl<T> From<crossbeam_channel::TrySendError<T>> for TrySendError<T> {
    fn from(err: crossbeam_channel::TrySendError<T>) -> Self {
        match err {
            crossbeam_channel::TrySendError::Full(value) => TrySendError::Full(value),
            crossbeam_channel::TrySendError::Disconnected(value) => {
                TrySendError::Disconnected(value)
            }
        }
    }
}

/// End of stream: every sender is gone and the buffer is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("channel closed")]
pub struct RecvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecvTimeoutError {
    #[error("nothing received before the deadline")]
    Timeout,
    #[error("channel closed")]
    Closed,
}

impl From<crossbeam_channel::RecvTimeoutError> for RecvTimeoutError {
    fn from(err: crossbeam_channel::RecvTimeoutError) -> Self {
        match err {
            crossbeam_channel::RecvTimeoutError::Timeout => RecvTimeoutError::Timeout,
            crossbeam_channel::RecvTimeoutError::Disconnected => RecvTimeoutError::Closed,
        }
    }
}
