//! A Fibonacci responder behind a request/response channel pair, and a
//! driver that checks it never answers faster than its minimum interval.
//!
//! The responder answers each request with the next term of the sequence
//! seeded `1, 1` (so `1, 2, 3, 5, 8, ...`), reduced modulo 10^9, after
//! sleeping for its pace. The driver separately enforces a minimum time per
//! answer. Dropping the request side stops the responder.

use std::io::{BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use tour_channel::{rendezvous, RecvChan, SendChan};
use tour_runtime::{spawn, Task};

use crate::error::{ExerciseError, ExerciseResult};
use crate::input::LineReader;

pub const MODULUS: u64 = 1_000_000_000;

/// How fast the responder answers, and how fast the driver tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Sleep before each answer.
    pub responder: Duration,
    /// Any printed answer quicker than this stops the run.
    pub minimum: Duration,
}

impl Pacing {
    /// Responder pace equal to the enforced minimum.
    pub fn uniform(interval: Duration) -> Self {
        Self {
            responder: interval,
            minimum: interval,
        }
    }
}

/// Serve requests until the request channel closes or nobody reads answers.
pub fn modulo_fibonacci_sequence(
    requests: RecvChan<()>,
    results: SendChan<u64>,
    pace: Duration,
) {
    let (mut x, mut y) = (1_u64, 1_u64);
    for () in &requests {
        thread::sleep(pace);
        (x, y) = (y, (x + y) % MODULUS);
        if results.send(x).is_err() {
            tracing::debug!("fibonacci results receiver dropped");
            return;
        }
    }
    tracing::debug!("fibonacci requests closed");
}

/// Client side of a running responder.
pub struct FibonacciService {
    requests: SendChan<()>,
    results: RecvChan<u64>,
    responder: Task<()>,
}

impl FibonacciService {
    /// Start a responder that sleeps `pace` before each answer.
    pub fn start(pace: Duration) -> ExerciseResult<Self> {
        let (requests, request_rx) = rendezvous();
        let (result_tx, results) = rendezvous();
        let responder =
            spawn(move || modulo_fibonacci_sequence(request_rx, result_tx, pace))?;
        Ok(Self {
            requests,
            results,
            responder,
        })
    }

    /// Request and wait for the next term.
    pub fn next_term(&self) -> ExerciseResult<u64> {
        self.requests
            .send(())
            .map_err(|_| ExerciseError::ResponderGone)?;
        self.results.recv().map_err(|_| ExerciseError::ResponderGone)
    }

    /// Close the request side and wait for the responder to exit.
    pub fn shutdown(self) -> ExerciseResult<()> {
        self.requests.close();
        self.responder.join()?;
        Ok(())
    }
}

/// How a driver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// Every requested term was printed.
    Completed { printed: usize },
    /// A printed answer came back faster than the enforced minimum.
    RateTooHigh { printed: usize },
}

/// Discards the first `skip` terms, then prints up to `total` terms, one per
/// line, stopping with "Rate is too high" if any printed term arrived in
/// less than `pacing.minimum`.
///
/// # Errors
///
/// `TooManyTerms` when `skip + total` does not fit in a `usize`.
pub fn drive(
    skip: usize,
    total: usize,
    pacing: Pacing,
    output: &mut impl Write,
) -> ExerciseResult<DriveOutcome> {
    let requests = skip
        .checked_add(total)
        .ok_or(ExerciseError::TooManyTerms { skip, total })?;
    let service = FibonacciService::start(pacing.responder)?;
    let mut printed = 0;

    for i in 0..requests {
        let start = Instant::now();
        let term = service.next_term()?;
        if i < skip {
            continue;
        }
        if start.elapsed() < pacing.minimum {
            writeln!(output, "Rate is too high")?;
            service.shutdown()?;
            return Ok(DriveOutcome::RateTooHigh { printed });
        }
        writeln!(output, "{term}")?;
        printed += 1;
    }

    service.shutdown()?;
    Ok(DriveOutcome::Completed { printed })
}

/// Reads `skip` then `total`, and drives the responder.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    pacing: Pacing,
) -> ExerciseResult<DriveOutcome> {
    let mut reader = LineReader::new(input);
    let skip = reader.number::<usize>("skip")?;
    let total = reader.number::<usize>("total")?;
    drive(skip, total, pacing, &mut output)
}
