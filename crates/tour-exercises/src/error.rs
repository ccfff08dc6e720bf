//! Exercise errors

use std::num::ParseIntError;

use thiserror::Error;
use tour_runtime::{RuntimeError, TaskError};

pub type ExerciseResult<T> = Result<T, ExerciseError>;

#[derive(Debug, Error)]
pub enum ExerciseError {
    /// A number read from input did not parse
    #[error("invalid number for {what}: '{input}'")]
    InvalidNumber {
        what: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Input ended before a required line
    #[error("missing input line: {0}")]
    MissingInput(&'static str),

    /// Skip plus total does not fit in a request count
    #[error("cannot request {skip} + {total} terms")]
    TooManyTerms { skip: usize, total: usize },

    #[error("the repeated string must not be empty")]
    EmptyPattern,

    /// The Fibonacci responder stopped answering
    #[error("fibonacci responder is gone")]
    ResponderGone,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Task(#[from] TaskError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = "12x".parse::<u64>().unwrap_err();
        let err = ExerciseError::InvalidNumber {
            what: "skip",
            input: "12x".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid number for skip: '12x'");
        assert!(std::error::Error::source(&err).is_some());

        assert_eq!(
            ExerciseError::MissingInput("total").to_string(),
            "missing input line: total"
        );
    }
}
