//! Fan-in: a helper task classifies records and sends the answers back over
//! an unbuffered channel, one per record, in input order.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tour_channel::{rendezvous, SendChan};
use tour_runtime::spawn;

use crate::DemoError;

/// 2020-01-01T00:00:00Z as seconds since the Unix epoch.
pub const CUTOFF_UNIX_SECS: u64 = 1_577_836_800;

/// The instant before which an email counts as old.
pub fn cutoff() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(CUTOFF_UNIX_SECS)
}

/// A dated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub body: String,
    pub date: SystemTime,
}

impl Email {
    pub fn new(body: impl Into<String>, date: SystemTime) -> Self {
        Self {
            body: body.into(),
            date,
        }
    }

    /// Strictly before the cutoff.
    pub fn is_old(&self) -> bool {
        self.date < cutoff()
    }
}

/// Classify each email on a helper task and collect the answers.
///
/// `result[i]` corresponds to `emails[i]`.
pub fn check_email_age<const N: usize>(emails: [Email; N]) -> Result<[bool; N], DemoError> {
    let (tx, rx) = rendezvous::<bool>();
    let sender = spawn(move || send_is_old(&tx, &emails))?;

    let mut is_old = [false; N];
    for (received, slot) in is_old.iter_mut().enumerate() {
        *slot = rx.recv().map_err(|_| DemoError::StreamClosed {
            stream: "email age",
            received,
            expected: N,
        })?;
    }

    sender.join()??;
    Ok(is_old)
}

fn send_is_old(tx: &SendChan<bool>, emails: &[Email]) -> Result<(), DemoError> {
    for email in emails {
        tx.send(email.is_old())
            .map_err(|_| DemoError::ReceiverGone { stream: "email age" })?;
    }
    Ok(())
}
