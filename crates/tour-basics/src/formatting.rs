//! Building strings with `format!`: interpolation, precision, and constants
//! joined at compile time.

/// Joined by the compiler; no allocation at run time.
pub const FULL_NAME: &str = concat!("daniela", "morales");

pub fn full_name_line() -> String {
    format!("My fullname is : {FULL_NAME}")
}

/// Any `Display` value interpolates the same way.
pub fn age_line(age: impl std::fmt::Display) -> String {
    format!("I am {age} years old")
}

/// `precision` digits after the point, rounded.
pub fn age_line_rounded(age: f64, precision: usize) -> String {
    format!("I am {age:.precision$} years old")
}

pub fn open_rate_message(first_name: &str, open_rate: f64) -> String {
    format!("Hi {first_name} your open rate is {open_rate:.10} percent")
}

pub fn mileage_line(mileage: u32, company: &str) -> String {
    format!("The mileage is equal to: {mileage} and company name is: {company}")
}
