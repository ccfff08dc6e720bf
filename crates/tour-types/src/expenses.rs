//! Expenses as a closed set of variants.

/// Something we pay for when sending a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expense {
    Email {
        to_address: String,
        body: String,
        is_subscribed: bool,
    },
    Sms {
        to_phone_number: String,
        body: String,
        is_subscribed: bool,
    },
    Invalid,
}

impl Expense {
    /// Per-byte cost of the body, cheaper for subscribers.
    pub fn cost(&self) -> f64 {
        match self {
            Expense::Email {
                body, is_subscribed, ..
            } => body.len() as f64 * if *is_subscribed { 0.01 } else { 0.05 },
            Expense::Sms {
                body, is_subscribed, ..
            } => body.len() as f64 * if *is_subscribed { 0.03 } else { 0.1 },
            Expense::Invalid => 0.0,
        }
    }

    /// Destination and cost. An invalid expense has neither.
    pub fn report(&self) -> (String, f64) {
        match self {
            Expense::Email { to_address, .. } => (to_address.clone(), self.cost()),
            Expense::Sms {
                to_phone_number, ..
            } => (to_phone_number.clone(), self.cost()),
            Expense::Invalid => (String::new(), 0.0),
        }
    }
}
