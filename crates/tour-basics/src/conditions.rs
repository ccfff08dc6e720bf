//! Branching on comparisons, and bindings scoped to a single `if`.

/// Whether a message of `len` characters fits under `max`.
pub fn message_status(len: usize, max: usize) -> &'static str {
    if len <= max {
        "Message sent"
    } else {
        "Message not sent"
    }
}

/// An address is valid when it has at least one byte.
///
/// The length is matched inside the `if` and never bound in the
/// enclosing scope.
pub fn email_status(email: &str) -> &'static str {
    if let 1.. = email.len() {
        "email is valid"
    } else {
        "email is invalid"
    }
}
