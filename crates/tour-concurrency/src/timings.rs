//! Fixed delays used by the exercises.

use serde::Deserialize;
use std::time::Duration;

/// Every delay the exercises sleep for. Defaults reproduce the lesson's
/// pacing; tests shrink them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoTimings {
    /// How long the background half of `notify` waits before printing.
    pub notify_delay_ms: u64,
    /// How long the `notify` demo waits for its background task.
    pub notify_grace_ms: u64,
    /// Delay after the first ping; doubles each round.
    pub first_ping_delay_ms: u64,
    /// Simulated latency inside each guarded-counter critical section.
    pub counter_latency_us: u64,
}

impl Default for DemoTimings {
    fn default() -> Self {
        Self {
            notify_delay_ms: 250,
            notify_grace_ms: 500,
            first_ping_delay_ms: 50,
            counter_latency_us: 1,
        }
    }
}

impl DemoTimings {
    /// Near-zero delays that keep the relative ordering of the defaults.
    pub fn fast() -> Self {
        Self {
            notify_delay_ms: 5,
            notify_grace_ms: 50,
            first_ping_delay_ms: 1,
            counter_latency_us: 0,
        }
    }

    pub fn notify_delay(&self) -> Duration {
        Duration::from_millis(self.notify_delay_ms)
    }

    pub fn notify_grace(&self) -> Duration {
        Duration::from_millis(self.notify_grace_ms)
    }

    pub fn first_ping_delay(&self) -> Duration {
        Duration::from_millis(self.first_ping_delay_ms)
    }

    pub fn counter_latency(&self) -> Duration {
        Duration::from_micros(self.counter_latency_us)
    }
}
