//! Billing errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BillingError {
    /// The balance cannot cover the item; nothing was charged
    #[error("insufficient funds: cost {cost:.2} exceeds balance {balance:.2}")]
    InsufficientFunds { cost: f64, balance: f64 },
}
