//! Validation errors

use thiserror::Error;

/// Result type for lesson operations that can reject their input
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected input, carrying a human-readable reason
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The account is not allowed to perform the operation
    #[error("there was an error with your account: {reason}")]
    User { reason: String },

    /// The operation has no meaningful result for this input
    #[error("invalid operation, the reason was: {reason}")]
    InvalidOperation { reason: String },

    #[error("can not divide by zero")]
    DivideByZero,

    /// A budget loop whose cost never grows would never end
    #[error("cost multiplier {multiplier} never exceeds a budget of {budget} pennies")]
    NonGrowingMultiplier { multiplier: f64, budget: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::User {
            reason: "failed to send message.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "there was an error with your account: failed to send message."
        );
        assert_eq!(ValidationError::DivideByZero.to_string(), "can not divide by zero");

        let err = ValidationError::NonGrowingMultiplier {
            multiplier: 0.5,
            budget: 10,
        };
        assert_eq!(
            err.to_string(),
            "cost multiplier 0.5 never exceeds a budget of 10 pennies"
        );
    }
}
