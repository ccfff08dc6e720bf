//! Generator stream: a producer streams the first `n` Fibonacci terms and
//! closes; the consumer ranges over the stream.

use tour_channel::{rendezvous, RecvChan, SendChan};
use tour_runtime::spawn;

use crate::DemoError;

/// Start a producer for the first `n` terms (0, 1, 1, 2, ...).
///
/// The stream is single-use: once drained it cannot be restarted.
/// Terms beyond `u64::MAX` are not produced; the stream closes early.
pub fn generate(n: usize) -> Result<RecvChan<u64>, DemoError> {
    let (tx, rx) = rendezvous::<u64>();
    // The producer ends on its own: after `n` terms, or when the receiver is dropped.
    spawn(move || fibonacci(n, tx))?.detach();
    Ok(rx)
}

/// Collect every term in emission order until the stream closes.
pub fn collect(stream: RecvChan<u64>) -> Vec<u64> {
    stream.into_iter().collect()
}

pub fn concurrent_fib(n: usize) -> Result<Vec<u64>, DemoError> {
    Ok(collect(generate(n)?))
}

fn fibonacci(n: usize, tx: SendChan<u64>) {
    let mut current = Some(0_u64);
    let mut next = Some(1_u64);

    for emitted in 0..n {
        let Some(term) = current else {
            tracing::warn!(emitted, requested = n, "next term overflows u64, closing early");
            break;
        };
        if tx.send(term).is_err() {
            tracing::debug!(emitted, "consumer went away");
            return;
        }
        let after = next.and_then(|b| term.checked_add(b));
        current = next;
        next = after;
    }
    tx.close();
}
