//! Generic billing: line items charged against a balance, and billers
//! parameterized by the kind of customer they charge.

use std::fmt;
use std::time::SystemTime;

use crate::error::BillingError;

pub trait LineItem {
    fn cost(&self) -> f64;
    fn name(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub user_email: String,
    pub start_date: SystemTime,
    /// "monthly" and "yearly" are priced; anything else is free.
    pub interval: String,
}

impl LineItem for Subscription {
    fn cost(&self) -> f64 {
        match self.interval.as_str() {
            "monthly" => 25.0,
            "yearly" => 250.0,
            _ => 0.0,
        }
    }

    fn name(&self) -> String {
        format!("{} subscription", self.interval)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneTimeUsagePlan {
    pub user_email: String,
    pub num_emails_allowed: u32,
}

impl OneTimeUsagePlan {
    const COST_PER_EMAIL: f64 = 0.03;
}

impl LineItem for OneTimeUsagePlan {
    fn cost(&self) -> f64 {
        f64::from(self.num_emails_allowed) * Self::COST_PER_EMAIL
    }

    fn name(&self) -> String {
        format!("one time usage plan with {} emails", self.num_emails_allowed)
    }
}

/// Charges `new_item` against `balance`.
///
/// On success returns the history with the item appended and the remaining
/// balance. On failure nothing is charged.
pub fn charge_for_line_item<T: LineItem>(
    new_item: T,
    mut history: Vec<T>,
    balance: f64,
) -> Result<(Vec<T>, f64), BillingError> {
    let cost = new_item.cost();
    if cost > balance {
        return Err(BillingError::InsufficientFunds { cost, balance });
    }

    tracing::debug!(item = %new_item.name(), cost, balance, "charged line item");
    history.push(new_item);
    Ok((history, balance - cost))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plan {
    #[default]
    Basic,
    Pro,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Basic => write!(f, "basic"),
            Plan::Pro => write!(f, "pro"),
        }
    }
}

pub trait Customer {
    fn billing_email(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
}

impl Customer for User {
    fn billing_email(&self) -> &str {
        &self.email
    }
}

/// Billed through its admin's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Org {
    pub admin: User,
    pub name: String,
}

impl Customer for Org {
    fn billing_email(&self) -> &str {
        self.admin.billing_email()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bill<C: Customer> {
    pub customer: C,
    pub amount: f64,
}

/// Charges one kind of customer.
pub trait Biller<C: Customer> {
    fn charge(&self, customer: C) -> Bill<C>;
    fn name(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserBiller {
    pub plan: Plan,
}

impl Biller<User> for UserBiller {
    fn charge(&self, customer: User) -> Bill<User> {
        let amount = match self.plan {
            Plan::Basic => 50.0,
            Plan::Pro => 100.0,
        };
        Bill { customer, amount }
    }

    fn name(&self) -> String {
        format!("{} user biller", self.plan)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrgBiller {
    pub plan: Plan,
}

impl Biller<Org> for OrgBiller {
    fn charge(&self, customer: Org) -> Bill<Org> {
        let amount = match self.plan {
            Plan::Basic => 2000.0,
            Plan::Pro => 3000.0,
        };
        Bill { customer, amount }
    }

    fn name(&self) -> String {
        format!("{} org biller", self.plan)
    }
}
