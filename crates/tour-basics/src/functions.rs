//! Plain functions, callbacks, tuple returns and guard clauses.

use crate::error::{ValidationError, ValidationResult};

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Returns `f(x, y)` if it is smaller than `x * y`, otherwise zero.
pub fn apply_callback<F>(f: F, x: i64, y: i64) -> i64
where
    F: Fn(i64, i64) -> i64,
{
    match f(x, y) {
        result if result < x * y => result,
        _ => 0,
    }
}

/// Both coordinates start at their zero value.
pub fn coords() -> (i64, i64) {
    Default::default()
}

pub fn divide(dividend: i64, divisor: i64) -> ValidationResult<i64> {
    if divisor == 0 {
        return Err(ValidationError::DivideByZero);
    }
    dividend
        .checked_div(divisor)
        .ok_or_else(|| ValidationError::InvalidOperation {
            reason: format!("{dividend} / {divisor} overflows"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-4, 4), 0);
    }

    #[test]
    fn test_apply_callback() {
        assert_eq!(apply_callback(add, 3, 4), 7);
        // 5 + 1 is not below 5 * 1.
        assert_eq!(apply_callback(add, 5, 1), 0);
        assert_eq!(apply_callback(|x, y| x - y, 10, 2), 8);
    }

    #[test]
    fn test_coords() {
        assert_eq!(coords(), (0, 0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 3), Ok(3));
        assert_eq!(divide(-9, 3), Ok(-3));
        assert_eq!(divide(1, 0), Err(ValidationError::DivideByZero));
        assert!(matches!(
            divide(i64::MIN, -1),
            Err(ValidationError::InvalidOperation { .. })
        ));
    }
}
