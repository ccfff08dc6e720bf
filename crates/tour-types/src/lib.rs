//! # Tour Types
//!
//! Lessons on building types and abstracting over them:
//!
//! - [`structs`] - plain data, nesting, composition with forwarding accessors
//! - [`interfaces`] - traits implemented explicitly per capability
//! - [`expenses`] and [`computers`] - closed variant sets as enums
//! - [`generics`] - type parameters, bounds, a sealed numeric constraint
//! - [`billing`] - generic line items and billers

pub mod billing;
pub mod computers;
pub mod error;
pub mod expenses;
pub mod generics;
pub mod interfaces;
pub mod structs;

pub use error::BillingError;

use billing::{Biller, OrgBiller, Plan, UserBiller};
use computers::{Computer, LinuxComputer, MacComputer};
use expenses::Expense;
use interfaces::Shape;

/// One console line per lesson result, in presentation order.
pub fn lesson_lines() -> Vec<String> {
    let mut lines = Vec::new();

    let auth = structs::AuthenticationInfo {
        username: "Google".to_string(),
        password: "12345".to_string(),
    };
    lines.push(auth.basic_auth());

    let dog = structs::Dog::new(
        structs::Animal {
            name: "Doggy".to_string(),
            colour: "brown".to_string(),
        },
        "wooof",
    );
    lines.push(dog.describe());

    let rect = interfaces::Rect {
        width: 3.0,
        height: 4.0,
    };
    lines.push(format!(
        "rect area {:.2}, perimeter {:.2}",
        rect.area(),
        rect.perimeter()
    ));
    lines.push(interfaces::send_message(&interfaces::SmsMessage {
        phone_number: 123456,
    }));

    for expense in [
        Expense::Email {
            to_address: "john@doe.com".to_string(),
            body: "hello there".to_string(),
            is_subscribed: true,
        },
        Expense::Sms {
            to_phone_number: "+155555509832".to_string(),
            body: "hello there".to_string(),
            is_subscribed: false,
        },
        Expense::Invalid,
    ] {
        let (to, cost) = expense.report();
        lines.push(format!("expense to '{to}': {cost:.2}"));
    }

    let laptop = LinuxComputer {
        architecture: "x86_64".to_string(),
        os_name: "ubuntu".to_string(),
        ..Default::default()
    };
    let mac = MacComputer::new(LinuxComputer {
        os_name: "macOS".to_string(),
        ..laptop.clone()
    });
    lines.push(computers::describe(&Computer::Linux(laptop)));
    lines.push(computers::describe(&Computer::Mac(mac)));

    let (left, right) = generics::split_any_slice(&[1, 2, 3, 4, 5]);
    lines.push(format!("split: {left:?} {right:?}"));
    match generics::divide_numbers(2.3, 4.78) {
        Some(quotient) => lines.push(format!("2.3 / 4.78 = {quotient:.3}")),
        None => lines.push("2.3 / 4.78 is undefined".to_string()),
    }

    let subscription = billing::Subscription {
        user_email: "john@example.com".to_string(),
        start_date: std::time::SystemTime::UNIX_EPOCH,
        interval: "yearly".to_string(),
    };
    match billing::charge_for_line_item(subscription, Vec::new(), 100.0) {
        Ok((_, balance)) => lines.push(format!("charged, balance {balance:.2}")),
        Err(err) => lines.push(err.to_string()),
    }

    let user_biller = UserBiller { plan: Plan::Pro };
    let bill = user_biller.charge(billing::User {
        email: "kaladin@example.com".to_string(),
    });
    lines.push(format!("{}: {:.2}", user_biller.name(), bill.amount));
    let org_biller = OrgBiller::default();
    let bill = org_biller.charge(billing::Org {
        admin: billing::User {
            email: "admin@bridge4.org".to_string(),
        },
        name: "Bridge Four".to_string(),
    });
    lines.push(format!("{}: {:.2}", org_biller.name(), bill.amount));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lesson_lines() {
        let lines = lesson_lines();
        assert_eq!(lines[0], "Authorization: Basic Google:12345");
        for expected in [
            "expense to 'john@doe.com': 0.11",
            "expense to '+155555509832': 1.10",
            "expense to '': 0.00",
            "we have a ubuntu computer",
            "we have a macOS computer",
            "insufficient funds: cost 250.00 exceeds balance 100.00",
            "pro user biller: 100.00",
            "basic org biller: 2000.00",
        ] {
            assert!(lines.iter().any(|line| line == expected), "missing {expected}");
        }
    }
}
