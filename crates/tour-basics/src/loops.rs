//! Counting loops, unbounded loops and condition-only loops.

use crate::error::{ValidationError, ValidationResult};

fn message_cost(i: usize) -> f64 {
    1.0 + 0.01 * i as f64
}

/// Total cost of messages `0..=num_messages`, where message `i` costs
/// `1.0 + 0.01 * i`.
pub fn bulk_send(num_messages: usize) -> f64 {
    (0..=num_messages).map(message_cost).sum()
}

/// Running cost of messages `0..=i`, in closed form.
fn running_cost(i: f64) -> f64 {
    (i + 1.0) * (1.0 + 0.005 * i)
}

/// Index of the first message whose running cost exceeds `threshold`.
///
/// Returns `None` when `threshold` is not finite, or when that index would
/// not fit in a `usize`.
pub fn max_messages(threshold: f64) -> Option<usize> {
    if !threshold.is_finite() {
        return None;
    }
    if running_cost(0.0) > threshold {
        return Some(0);
    }

    // Positive root of 0.005 i^2 + 1.005 i + (1 - threshold) = 0.
    let root = (-1.005 + (1.005_f64.powi(2) + 0.02 * (threshold - 1.0)).sqrt()) / 0.01;
    if root >= usize::MAX as f64 {
        return None;
    }

    // The root is within a step or two of the answer; settle on the exact index.
    let mut i = root.max(0.0).floor() as usize;
    while i > 0 && running_cost((i - 1) as f64) > threshold {
        i -= 1;
    }
    while running_cost(i as f64) <= threshold {
        i = i.checked_add(1)?;
    }
    Some(i)
}

/// How many messages fit in `max_cost_pennies` when the first costs one
/// penny and each next one costs `multiplier` times the previous.
///
/// Message `k` costs `multiplier^k`, so the count comes from a logarithm
/// rather than a loop and stays cheap for multipliers barely above one.
///
/// # Errors
///
/// `NonGrowingMultiplier` if the first message fits and the cost never grows.
pub fn max_messages_to_send(multiplier: f64, max_cost_pennies: u32) -> ValidationResult<usize> {
    let budget = f64::from(max_cost_pennies);
    if budget < 1.0 {
        return Ok(0);
    }

    // NaN lands here too.
    if !(multiplier > 1.0) {
        return Err(ValidationError::NonGrowingMultiplier {
            multiplier,
            budget: max_cost_pennies,
        });
    }

    let mut steps = (budget.ln() / (multiplier - 1.0).ln_1p()).floor();
    // Exact powers can land the logarithm one step off either way.
    if multiplier.powf(steps + 1.0) <= budget {
        steps += 1.0;
    } else if steps > 0.0 && multiplier.powf(steps) > budget {
        steps -= 1.0;
    }
    Ok(steps as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bulk_send() {
        assert!(close(bulk_send(0), 1.0));
        assert!(close(bulk_send(1), 2.01));
        assert!(close(bulk_send(10), 11.55));
    }

    #[test]
    fn test_max_messages() {
        assert_eq!(max_messages(-1.0), Some(0));
        assert_eq!(max_messages(1.0), Some(1));
        assert_eq!(max_messages(10.0), Some(9));
        assert_eq!(max_messages(f64::INFINITY), None);
        assert_eq!(max_messages(f64::NAN), None);
    }

    #[test]
    fn test_max_messages_matches_running_sum() {
        for threshold in [0.5, 3.0, 37.25, 1000.0, 12345.6] {
            let mut total = 0.0;
            let mut expected = 0;
            loop {
                total += message_cost(expected);
                if total > threshold {
                    break;
                }
                expected += 1;
            }
            assert_eq!(max_messages(threshold), Some(expected), "threshold {threshold}");
        }
    }

    #[test]
    fn test_max_messages_huge_thresholds_return() {
        let i = max_messages(1e30).unwrap();
        assert!(running_cost(i as f64) > 1e30);
        assert!(running_cost((i - 1) as f64) <= 1e30);

        assert_eq!(max_messages(1e40), None);
        assert_eq!(max_messages(f64::MAX), None);
    }

    #[test]
    fn test_max_messages_to_send() {
        assert_eq!(max_messages_to_send(2.0, 10), Ok(4));
        assert_eq!(max_messages_to_send(1.1, 5), Ok(17));
        assert_eq!(max_messages_to_send(3.0, 0), Ok(0));
        assert_eq!(max_messages_to_send(2.0, 8), Ok(4));
        assert_eq!(max_messages_to_send(2.0, 1), Ok(1));
        assert_eq!(max_messages_to_send(10.0, 1000), Ok(4));
        assert_eq!(max_messages_to_send(f64::INFINITY, 7), Ok(1));
    }

    #[test]
    fn test_tiny_growth_is_counted_not_looped() {
        let count = max_messages_to_send(1.0 + f64::EPSILON, 2).unwrap();
        // ln 2 / ln(1 + 2^-52) is about 3.1e15.
        assert!(count > 1 << 50, "got {count}");
    }

    #[test]
    fn test_non_growing_multiplier_rejected() {
        assert!(matches!(
            max_messages_to_send(1.0, 5),
            Err(ValidationError::NonGrowingMultiplier { budget: 5, .. })
        ));
        assert!(max_messages_to_send(0.5, 1).is_err());
        assert!(max_messages_to_send(f64::NAN, 1).is_err());
        // Nothing fits, so the multiplier never matters.
        assert_eq!(max_messages_to_send(0.5, 0), Ok(0));
    }
}
