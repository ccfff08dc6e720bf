//! Errors surfaced by the concurrency exercises.

use thiserror::Error;
use tour_runtime::{RuntimeError, TaskError};

/// Errors surfaced by the concurrency exercises.
///
/// A stuck exercise is not an error: it blocks. These variants cover the
/// cases where blocking is impossible because the other side is gone.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A task could not be started.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// A task panicked.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// A receiver expected more values but the stream closed.
    #[error("{stream} stream closed after {received} value(s), expected {expected}")]
    StreamClosed {
        stream: &'static str,
        received: usize,
        expected: usize,
    },

    /// A sender found nobody left to receive.
    #[error("{stream} stream has no receiver")]
    ReceiverGone { stream: &'static str },

    /// A queue was asked to hold more than its capacity.
    #[error("queue is full at capacity {capacity}")]
    QueueFull { capacity: usize },

    /// No exercise with this name.
    #[error("unknown demo '{0}'")]
    UnknownDemo(String),
}
