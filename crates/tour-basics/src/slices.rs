//! Slices: sized views over contiguous storage.

/// Cost of each message at one cent per byte, in input order.
pub fn message_costs<S: AsRef<str>>(messages: &[S]) -> Vec<f64> {
    messages
        .iter()
        .map(|message| message.as_ref().len() as f64 * 0.01)
        .collect()
}

pub fn sum(nums: &[i64]) -> i64 {
    nums.iter().sum()
}

/// A cost incurred on a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cost {
    pub day: usize,
    pub value: f64,
}

/// Total cost per day, indexed from day 0 to the latest day present.
pub fn costs_by_day(costs: &[Cost]) -> Vec<f64> {
    let Some(last_day) = costs.iter().map(|cost| cost.day).max() else {
        return Vec::new();
    };

    let mut by_day = vec![0.0; last_day + 1];
    for cost in costs {
        by_day[cost.day] += cost.value;
    }
    by_day
}

/// A `rows` by `cols` grid where cell `(i, j)` holds `i * j`.
pub fn create_matrix(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    (0..rows)
        .map(|i| (0..cols).map(|j| i * j).collect())
        .collect()
}

/// Splits at the midpoint; the right half gets the extra element.
pub fn split_at_mid<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len() / 2)
}
