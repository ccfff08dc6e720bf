//! # Tour Concurrency
//!
//! Nine independent exercises, each illustrating one channel or task pattern:
//!
//! | exercise | pattern |
//! |----------|---------|
//! | [`notify`] | fire-and-forget task with an explicit handle |
//! | [`email_age`] | fan-in over an unbuffered channel |
//! | [`tokens`] | zero-payload signals counted by a consumer |
//! | [`queue`] | buffered channel filled, then drained |
//! | [`reports`] | close-and-drain accumulation |
//! | [`fibonacci`] | generator stream consumed by range |
//! | [`multiplex`] | select over two streams until one closes |
//! | [`ping_pong`] | two tasks handing signals back and forth |
//! | [`counter`] | map guarded by a mutex |
//!
//! None shares state with another. Several can block forever when misused;
//! that is part of what they teach, so nothing here adds timeouts.
//!
//! Console output goes through a [`Transcript`], which either prints or
//! captures lines for inspection.

pub mod counter;
pub mod email_age;
pub mod error;
pub mod fibonacci;
pub mod multiplex;
pub mod notify;
pub mod ping_pong;
pub mod queue;
pub mod reports;
pub mod timings;
pub mod tokens;
pub mod transcript;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, UNIX_EPOCH};

pub use error::DemoError;
pub use timings::DemoTimings;
pub use transcript::Transcript;

/// Default number of ping rounds for [`Demo::PingPong`].
pub const DEFAULT_PINGS: usize = 4;

/// The nine exercises, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Notify,
    FanIn,
    Tokens,
    Queue,
    Reports,
    Fibonacci,
    Multiplex,
    PingPong,
    Counter,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Notify,
        Demo::FanIn,
        Demo::Tokens,
        Demo::Queue,
        Demo::Reports,
        Demo::Fibonacci,
        Demo::Multiplex,
        Demo::PingPong,
        Demo::Counter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Notify => "notify",
            Demo::FanIn => "fan-in",
            Demo::Tokens => "tokens",
            Demo::Queue => "queue",
            Demo::Reports => "reports",
            Demo::Fibonacci => "fibonacci",
            Demo::Multiplex => "multiplex",
            Demo::PingPong => "ping-pong",
            Demo::Counter => "counter",
        }
    }

    /// Run the exercise with its stock inputs.
    pub fn run(
        self,
        timings: &DemoTimings,
        pings: usize,
        transcript: &Transcript,
    ) -> Result<(), DemoError> {
        tracing::info!(demo = self.name(), "starting");
        match self {
            Demo::Notify => notify::send_emails_concurrently(timings, transcript)?,
            Demo::FanIn => {
                let day = Duration::from_secs(24 * 60 * 60);
                let emails = [
                    email_age::Email::new("Hi Sam", UNIX_EPOCH + day * 365 * 49),
                    email_age::Email::new("Hello Wendy", UNIX_EPOCH + day * 365 * 51),
                    email_age::Email::new("Hey Ana", UNIX_EPOCH + day * 365 * 52),
                ];
                let ages = email_age::check_email_age(emails)?;
                transcript.line(format!("Old emails: {ages:?}"));
            }
            Demo::Tokens => {
                let online = tokens::boot_databases(3, transcript)?;
                transcript.line(format!("{online} databases online, server starting"));
            }
            Demo::Queue => {
                let emails = ["Hello John, tell Kathy I said hi", "Whazzup bruther", "Bye"]
                    .map(String::from);
                queue::manage_emails_with_a_queue(&emails, transcript)?;
            }
            Demo::Reports => {
                reports::manage_reports_concurrently(reports::DEFAULT_BATCHES, transcript)?;
            }
            Demo::Fibonacci => {
                let series = fibonacci::concurrent_fib(10)?;
                transcript.line(format!("Fibonacci: {series:?}"));
            }
            Demo::Multiplex => {
                multiplex::multiplex_demo(transcript)?;
            }
            Demo::PingPong => {
                ping_pong::ping_pong_concurrency(pings, timings, transcript)?;
            }
            Demo::Counter => {
                counter::count_emails_concurrently(4, 25, timings, transcript)?;
            }
        }
        tracing::info!(demo = self.name(), "finished");
        Ok(())
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| DemoError::UnknownDemo(s.to_string()))
    }
}

/// Run every exercise in order.
pub fn run_all(
    timings: &DemoTimings,
    pings: usize,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    for demo in Demo::ALL {
        demo.run(timings, pings, transcript)?;
    }
    Ok(())
}
