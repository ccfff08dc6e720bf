//! Close-and-drain: the producer closes its stream; the consumer sums until
//! it sees the end.

use tour_channel::{rendezvous, RecvChan, RecvError, SendChan};
use tour_runtime::spawn;

use crate::{DemoError, Transcript};

pub const DEFAULT_BATCHES: usize = 10;

/// Reports added per batch index: batch `i` carries `i * 23` reports.
pub const REPORTS_PER_BATCH_STEP: u64 = 23;

/// Send one count per batch, then close.
pub fn send_reports(num_batches: usize, tx: SendChan<u64>) -> Result<(), DemoError> {
    for i in 0..num_batches as u64 {
        tx.send(i * REPORTS_PER_BATCH_STEP)
            .map_err(|_| DemoError::ReceiverGone { stream: "report" })?;
    }
    tx.close();
    Ok(())
}

/// Sum every value until the stream closes.
pub fn count_reports(rx: &RecvChan<u64>) -> u64 {
    let mut total = 0;
    loop {
        match rx.recv() {
            Ok(reports) => total += reports,
            Err(RecvError) => break,
        }
    }
    total
}

pub fn manage_reports_concurrently(
    num_batches: usize,
    transcript: &Transcript,
) -> Result<u64, DemoError> {
    let (tx, rx) = rendezvous::<u64>();
    let producer = spawn(move || send_reports(num_batches, tx))?;

    let total = count_reports(&rx);
    producer.join()??;

    transcript.line(format!("--- The total of reports to send are: {total} ---"));
    Ok(total)
}
