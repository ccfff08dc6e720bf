//! # Tour Runtime
//!
//! Starts tasks and hands back a [`Task`] for each one.
//!
//! A task that nobody waits for may never finish its work: the process can
//! exit first. Rather than leave that to timing, [`spawn`] returns a
//! `#[must_use]` handle and the caller says what it wants. [`Task::join`]
//! waits for the value; [`Task::detach`] lets the task go.
//!
//! Each task runs on its own named OS thread, configured once through
//! [`RuntimeConfig`] and [`init`].

pub mod error;
pub mod executor;
pub mod task;

use serde::Deserialize;

pub use error::{RuntimeError, TaskError};
pub use executor::{init, spawn};
pub use task::{Task, TaskId, TaskState};

/// How task threads are created. Read from the `[runtime]` table of a
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Thread names are `<thread_prefix>-<task number>`
    pub thread_prefix: String,
    /// Bytes; the platform default when unset
    pub stack_size: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            thread_prefix: "tour-task".to_string(),
            stack_size: None,
        }
    }
}

impl RuntimeConfig {
    pub fn with_thread_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_prefix = prefix.into();
        self
    }

    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }
}
