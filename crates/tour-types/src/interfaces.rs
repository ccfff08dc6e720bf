//! Traits as declared capabilities.
//!
//! Every implementation is spelled out with an `impl` block; a type that
//! happens to have the right methods does not qualify on its own.

use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * self.width + 2.0 * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

pub trait Message {
    fn message(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub recipient: String,
    pub sender: String,
}

impl Message for MailMessage {
    fn message(&self) -> String {
        format!("Sending mail msg from {} to {}", self.sender, self.recipient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmsMessage {
    pub phone_number: u64,
}

impl Message for SmsMessage {
    fn message(&self) -> String {
        format!("Sending SMS msg to phone number {}", self.phone_number)
    }
}

pub fn send_message(message: &dyn Message) -> String {
    let text = message.message();
    tracing::debug!(%text, "message sent");
    text
}

pub trait Employee {
    fn name(&self) -> &str;
    fn salary(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contractor {
    pub name: String,
    pub hourly_pay: u64,
    pub hours_per_year: u64,
}

impl Employee for Contractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u64 {
        self.hourly_pay * self.hours_per_year
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTime {
    pub name: String,
    pub salary: u64,
}

impl Employee for FullTime {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u64 {
        self.salary
    }
}

/// Total yearly payroll across any mix of employees.
pub fn payroll(employees: &[&dyn Employee]) -> u64 {
    employees.iter().map(|employee| employee.salary()).sum()
}

pub trait Study {
    fn total_read_books(&self, books_per_year: u32, years: u32) -> u32;
    fn degree(&self) -> &str;
}

pub trait Work {
    fn career(&self) -> &str;
    fn years_of_experience(&self) -> u32;
}

/// Implements both [`Study`] and [`Work`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub days_working: u32,
    pub degree: String,
    pub career: String,
}

impl Study for Person {
    fn total_read_books(&self, books_per_year: u32, years: u32) -> u32 {
        books_per_year * years
    }

    fn degree(&self) -> &str {
        &self.degree
    }
}

impl Work for Person {
    fn career(&self) -> &str {
        &self.career
    }

    fn years_of_experience(&self) -> u32 {
        self.days_working / 365
    }
}
