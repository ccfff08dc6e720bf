//! A count per key, guarded by one mutex.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tour_runtime::spawn;

use crate::{DemoError, DemoTimings, Transcript};

/// Counts per email address.
///
/// `inc` and `val` each hold the lock for their whole critical section,
/// including the simulated latency, so no two ever overlap.
#[derive(Debug, Default)]
pub struct SafeCounter {
    counts: Mutex<HashMap<String, u64>>,
    latency: Duration,
}

impl SafeCounter {
    pub fn new(latency: Duration) -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            latency,
        }
    }

    /// Read, wait, write back plus one.
    pub fn inc(&self, key: &str) {
        let mut counts = self.counts.lock();
        let current = counts.get(key).copied().unwrap_or(0);
        self.pause();
        counts.insert(key.to_string(), current + 1);
    }

    pub fn val(&self, key: &str) -> u64 {
        let counts = self.counts.lock();
        self.pause();
        counts.get(key).copied().unwrap_or(0)
    }

    fn pause(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

/// `workers` tasks each record `per_worker` sends to the same address.
pub fn count_emails_concurrently(
    workers: usize,
    per_worker: usize,
    timings: &DemoTimings,
    transcript: &Transcript,
) -> Result<u64, DemoError> {
    const ADDRESS: &str = "lane@example.com";

    let counter = Arc::new(SafeCounter::new(timings.counter_latency()));
    let tasks = (0..workers)
        .map(|_| {
            let counter = Arc::clone(&counter);
            spawn(move || {
                for _ in 0..per_worker {
                    counter.inc(ADDRESS);
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for task in tasks {
        task.join()?;
    }

    let total = counter.val(ADDRESS);
    transcript.line(format!("{ADDRESS} was sent {total} emails"));
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_missing_key_reads_zero() {
        let counter = SafeCounter::default();
        assert_eq!(counter.val("nobody"), 0);
        counter.inc("somebody");
        assert_eq!(counter.val("somebody"), 1);
        assert_eq!(counter.val("nobody"), 0);
    }

    #[test]
    fn test_parallel_increments_are_not_lost() {
        let transcript = Transcript::capture();
        let timings = DemoTimings {
            counter_latency_us: 1,
            ..DemoTimings::fast()
        };
        let total = count_emails_concurrently(8, 50, &timings, &transcript).unwrap();
        assert_eq!(total, 400);
        assert_eq!(transcript.lines(), vec!["lane@example.com was sent 400 emails"]);
    }

    #[test]
    fn test_reads_never_go_backwards() {
        let counter = Arc::new(SafeCounter::new(Duration::from_micros(1)));
        let stop = Arc::new(AtomicBool::new(false));

        let reader = {
            let counter = Arc::clone(&counter);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                let mut last = 0;
                while !stop.load(Ordering::SeqCst) {
                    let seen = counter.val("k");
                    assert!(seen >= last, "read {seen} after {last}");
                    last = seen;
                }
                last
            })
        };

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        counter.inc("k");
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }
        stop.store(true, Ordering::SeqCst);

        assert!(reader.join().unwrap() <= 400);
        assert_eq!(counter.val("k"), 400);
    }
}
