//! Thread-per-task spawning.
//!
//! The lessons run a handful of tasks at a time, so each gets its own OS
//! thread and there is no pool.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};
use std::thread;

use crate::error::{panic_message, RuntimeError};
use crate::task::{StateCell, Task, TaskId, TaskState};
use crate::RuntimeConfig;

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Install the configuration used by every later [`spawn`].
///
/// Returns `false`, changing nothing, if a configuration is already in
/// place. The first `spawn` installs the default one.
pub fn init(config: RuntimeConfig) -> bool {
    CONFIG.set(config).is_ok()
}

fn config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(RuntimeConfig::default)
}

/// Run `f` on a new task.
///
/// ```rust
/// let task = tour_runtime::spawn(|| "done").unwrap();
/// assert_eq!(task.join().unwrap(), "done");
/// ```
///
/// # Errors
///
/// `RuntimeError::SpawnFailed` if the OS refuses a new thread.
pub fn spawn<F, T>(f: F) -> Result<Task<T>, RuntimeError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let config = config();
    let id = TaskId::next();
    let state = StateCell::new();

    let name = format!("{}-{}", config.thread_prefix, id.get());
    let mut builder = thread::Builder::new().name(name);
    if let Some(bytes) = config.stack_size {
        builder = builder.stack_size(bytes);
    }

    let cell = Arc::clone(&state);
    let handle = builder
        .spawn(move || {
            cell.set(TaskState::Running);
            match panic::catch_unwind(AssertUnwindSafe(f)) {
                Ok(value) => {
                    cell.set(TaskState::Finished);
                    value
                }
                Err(payload) => {
                    cell.set(TaskState::Panicked);
                    let reason = panic_message(payload.as_ref());
                    tracing::warn!(task = %id, %reason, "task panicked");
                    panic::resume_unwind(payload)
                }
            }
        })
        .map_err(RuntimeError::SpawnFailed)?;

    tracing::debug!(task = %id, "spawned");
    Ok(Task::new(id, state, handle))
}
