//! # Tour Basics
//!
//! Small lessons on control flow and values:
//!
//! - [`formatting`] - interpolation, precision and constant strings
//! - [`conditions`] - comparisons and `if`-scoped bindings
//! - [`loops`] - counting, unbounded and condition-only loops
//! - [`functions`] - callbacks, tuple returns, guard clauses
//! - [`pointers`] - mutation through `&mut` versus mutating a copy
//! - [`slices`] - building, summing and splitting slices
//! - [`error_values`] - fallbacks and typed validation failures
//!
//! Validation failures come back as [`ValidationError`] values; nothing in
//! this crate aborts on bad input.

pub mod conditions;
pub mod error;
pub mod error_values;
pub mod formatting;
pub mod functions;
pub mod loops;
pub mod pointers;
pub mod slices;

pub use error::{ValidationError, ValidationResult};
pub use error_values::SmsPolicy;

/// One console line per lesson result, in presentation order.
pub fn lesson_lines() -> Vec<String> {
    let mut lines = vec![
        formatting::full_name_line(),
        formatting::age_line_rounded(10.559, 2),
        formatting::open_rate_message("Saul", 30.5),
        formatting::mileage_line(85450, "Tesla"),
        conditions::message_status(10, 20).to_string(),
        conditions::email_status("hello there!").to_string(),
        format!("bulk send of 10: {:.2}", loops::bulk_send(10)),
    ];

    match loops::max_messages(10.0) {
        Some(count) => lines.push(format!("max messages under 10.00: {count}")),
        None => lines.push("max messages under 10.00: none".to_string()),
    }
    lines.push(outcome(
        "messages within 10 pennies at x2",
        loops::max_messages_to_send(2.0, 10),
    ));

    lines.push(format!("add(2, 3) = {}", functions::add(2, 3)));
    lines.push(format!(
        "callback(add, 3, 4) = {}",
        functions::apply_callback(functions::add, 3, 4)
    ));
    lines.push(format!("coords = {:?}", functions::coords()));
    lines.push(outcome("10 / 3", functions::divide(10, 3)));
    lines.push(outcome("1 / 0", functions::divide(1, 0)));

    let mut message = String::from("dang it, what the heck");
    pointers::remove_profanity(&mut message);
    lines.push(message);

    let mut hair = pointers::Hair::new("brown");
    let copy = hair.with_color_copy("red");
    hair.set_color("black");
    lines.push(format!("hair is {}, its copy is {}", hair.color, copy.color));

    lines.push(format!(
        "message costs: {:?}",
        slices::message_costs(&["hello", "hi"])
    ));
    lines.push(format!("sum(1, 2, 3) = {}", slices::sum(&[1, 2, 3])));
    lines.push(format!("matrix 3x3: {:?}", slices::create_matrix(3, 3)));

    lines.push(format!(
        "convert '12a' = {}",
        error_values::convert_to_integer("12a")
    ));
    lines.push(outcome(
        "send sms",
        error_values::send_sms("hello", SmsPolicy::Blocked),
    ));
    lines.push(outcome("sqrt(-4)", error_values::square_root(-4)));

    lines
}

fn outcome<T: std::fmt::Debug>(label: &str, result: ValidationResult<T>) -> String {
    match result {
        Ok(value) => format!("{label}: {value:?}"),
        Err(err) => format!("{label}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_lines() {
        let lines = lesson_lines();
        assert_eq!(lines[0], "My fullname is : danielamorales");
        assert_eq!(lines[1], "I am 10.56 years old");
        assert_eq!(lines[4], "Message sent");
        assert!(lines.contains(&"1 / 0: can not divide by zero".to_string()));
        assert!(lines.contains(&"****** it, what the ******".to_string()));
        assert!(lines.contains(&"hair is black, its copy is red".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("send sms: there was an error")));
    }
}
