//! Handles to spawned tasks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;

use crate::error::{panic_message, TaskError};

/// Process-unique task number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Where a task is in its life, as seen from its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Thread started, body not entered yet.
    Pending,
    Running,
    /// Body returned a value.
    Finished,
    /// Body panicked.
    Panicked,
}

/// Shared between a [`Task`] and its thread.
#[derive(Debug)]
pub(crate) struct StateCell(Mutex<TaskState>);

impl StateCell {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self(Mutex::new(TaskState::Pending)))
    }

    pub(crate) fn set(&self, state: TaskState) {
        *self.0.lock() = state;
    }

    pub(crate) fn get(&self) -> TaskState {
        *self.0.lock()
    }
}

/// A running task. Either [`join`](Task::join) it to get its value or
/// [`detach`](Task::detach) it.
///
/// Dropping the handle is the same as detaching, minus the log line.
#[must_use = "join the task, or call `detach` if it may outlive the caller"]
pub struct Task<T> {
    id: TaskId,
    state: Arc<StateCell>,
    handle: JoinHandle<T>,
}

impl<T> Task<T> {
    pub(crate) fn new(id: TaskId, state: Arc<StateCell>, handle: JoinHandle<T>) -> Self {
        Self { id, state, handle }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn state(&self) -> TaskState {
        self.state.get()
    }

    /// True once the thread has exited, normally or by panic.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task and take its value.
    ///
    /// # Errors
    ///
    /// `TaskError::Panicked` carrying the panic message.
    pub fn join(self) -> Result<T, TaskError> {
        tracing::debug!(task = %self.id, "joining");
        self.handle
            .join()
            .map_err(|payload| TaskError::Panicked(panic_message(payload.as_ref())))
    }

    /// Stop tracking the task. It keeps running, but if the process exits
    /// first whatever it had left to do is lost.
    pub fn detach(self) {
        tracing::debug!(task = %self.id, state = ?self.state(), "detached");
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
