//! Errors as values: zero-value fallbacks and typed failures.

use crate::error::{ValidationError, ValidationResult};

/// Parses a base-10 integer, falling back to zero.
pub fn convert_to_integer(text: &str) -> i64 {
    text.parse().unwrap_or_default()
}

/// Whether the account may send SMS messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SmsPolicy {
    Allowed,
    #[default]
    Blocked,
}

pub fn send_sms(message: &str, policy: SmsPolicy) -> ValidationResult<()> {
    match policy {
        SmsPolicy::Allowed => {
            tracing::debug!(len = message.len(), "sms sent");
            Ok(())
        }
        SmsPolicy::Blocked => Err(ValidationError::User {
            reason: "failed to send message.".to_string(),
        }),
    }
}

pub fn square_root(radicand: i64) -> ValidationResult<f64> {
    if radicand < 0 {
        return Err(ValidationError::InvalidOperation {
            reason: "the root square must be a real number.".to_string(),
        });
    }
    Ok((radicand as f64).sqrt())
}
