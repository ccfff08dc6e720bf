//! The exercises driven the way a judge drives them: text in, text out.

use std::time::Duration;

use pretty_assertions::assert_eq;
use tour_exercises::modulo_fibonacci::{self, DriveOutcome};
use tour_exercises::{custom_sort, repeated_string, ExerciseConfig, ExerciseError, Pacing};

fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_repeated_string_large_n() {
    let out = output_of(|out| repeated_string::run("a\n1000000000000\n".as_bytes(), out).unwrap());
    assert_eq!(out, "1000000000000\n");
}

#[test]
fn test_repeated_string_missing_n() {
    let err = repeated_string::run("aba\n".as_bytes(), Vec::new()).unwrap_err();
    assert!(matches!(err, ExerciseError::MissingInput("n")));
}

#[test]
fn test_custom_sort_reference_case() {
    let out = output_of(|out| {
        custom_sort::run("abc ab abcde a abcd abbd\n".as_bytes(), out).unwrap()
    });
    assert_eq!(out, "a abc abcde abbd abcd ab\n");
}

#[test]
fn test_modulo_fibonacci_with_default_interval() {
    let pacing = ExerciseConfig::default().fibonacci_pacing();
    let mut out = Vec::new();
    let outcome = modulo_fibonacci::run("3\n4\n".as_bytes(), &mut out, pacing).unwrap();
    assert_eq!(outcome, DriveOutcome::Completed { printed: 4 });
    assert_eq!(String::from_utf8(out).unwrap(), "5\n8\n13\n21\n");
}

#[test]
fn test_modulo_fibonacci_nothing_requested() {
    let mut out = Vec::new();
    let outcome = modulo_fibonacci::drive(0, 0, Pacing::uniform(Duration::ZERO), &mut out).unwrap();
    assert_eq!(outcome, DriveOutcome::Completed { printed: 0 });
    assert!(out.is_empty());
}

#[test]
fn test_modulo_fibonacci_rate_too_high_from_stdin() {
    let pacing = Pacing {
        responder: Duration::ZERO,
        minimum: Duration::from_millis(50),
    };
    let mut out = Vec::new();
    let outcome = modulo_fibonacci::run("0\n5\n".as_bytes(), &mut out, pacing).unwrap();
    assert_eq!(outcome, DriveOutcome::RateTooHigh { printed: 0 });
    assert_eq!(String::from_utf8(out).unwrap(), "Rate is too high\n");
}
