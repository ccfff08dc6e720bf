//! # Tour Exercises
//!
//! Judge-style exercises that read their input from a reader and write
//! answers to a writer:
//!
//! - [`repeated_string`] - counting in an infinite repetition
//! - [`custom_sort`] - ordering words by length parity
//! - [`modulo_fibonacci`] - a rate-limited responder over channels
//!
//! Malformed numeric input surfaces as [`ExerciseError::InvalidNumber`].

pub mod custom_sort;
pub mod error;
pub mod input;
pub mod modulo_fibonacci;
pub mod repeated_string;

use std::time::Duration;

use serde::Deserialize;

pub use error::{ExerciseError, ExerciseResult};
pub use modulo_fibonacci::Pacing;

/// Tunables for the exercises.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExerciseConfig {
    /// Minimum time the Fibonacci driver accepts per answer (milliseconds)
    pub fibonacci_interval_ms: u64,
    /// How long the Fibonacci responder sleeps before each answer
    /// (milliseconds)
    pub fibonacci_pace_ms: u64,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            fibonacci_interval_ms: 3,
            fibonacci_pace_ms: 3,
        }
    }
}

impl ExerciseConfig {
    pub fn fibonacci_pacing(&self) -> Pacing {
        Pacing {
            responder: Duration::from_millis(self.fibonacci_pace_ms),
            minimum: Duration::from_millis(self.fibonacci_interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing() {
        assert_eq!(
            ExerciseConfig::default().fibonacci_pacing(),
            Pacing::uniform(Duration::from_millis(3))
        );
    }
}
