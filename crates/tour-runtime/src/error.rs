//! Runtime errors

use std::any::Any;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No thread could be started for the task.
    #[error("could not start a thread for the task: {0}")]
    SpawnFailed(#[source] std::io::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task panicked: {0}")]
    Panicked(String),
}

/// The message of a panic raised with `panic!("...")` or `panic!("{}", ..)`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
