//! Buffered queue: fill a channel sized to its contents, then drain it.

use tour_channel::{channel, RecvChan, TrySendError};

use crate::{DemoError, Transcript};

/// Put every email on a channel whose capacity is exactly `emails.len()`.
///
/// Never blocks. The sending side is closed afterwards; the buffered values
/// stay available to the receiver.
pub fn add_emails_to_queue(emails: &[String]) -> Result<RecvChan<String>, DemoError> {
    let (tx, rx) = channel(emails.len());
    for email in emails {
        tx.try_send(email.clone()).map_err(|e| match e {
            TrySendError::Full(_) => DemoError::QueueFull {
                capacity: emails.len(),
            },
            TrySendError::Disconnected(_) => DemoError::ReceiverGone { stream: "email queue" },
        })?;
    }
    tx.close();
    Ok(rx)
}

/// Take `count` emails off the queue in FIFO order, printing each.
pub fn send_email_batch(
    count: usize,
    queue: &RecvChan<String>,
    transcript: &Transcript,
) -> Result<Vec<String>, DemoError> {
    let mut sent = Vec::with_capacity(count);
    for received in 0..count {
        let email = queue.recv().map_err(|_| DemoError::StreamClosed {
            stream: "email queue",
            received,
            expected: count,
        })?;
        transcript.line(format!("Sending email msg: {email}"));
        sent.push(email);
    }
    Ok(sent)
}

/// Fill, then drain. Strictly sequential: no task is involved.
pub fn manage_emails_with_a_queue(
    emails: &[String],
    transcript: &Transcript,
) -> Result<Vec<String>, DemoError> {
    let queue = add_emails_to_queue(emails)?;
    send_email_batch(emails.len(), &queue, transcript)
}
