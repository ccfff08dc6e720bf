//! Multiplexing: one consumer serves two streams, taking whichever value is
//! ready first, until one stream closes.

use std::thread;
use std::time::Duration;

use tour_channel::{rendezvous, select2_recv, RecvChan, Select2Result, SendChan};
use tour_runtime::spawn;

use crate::{DemoError, Transcript};

/// Which stream ended the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedStream {
    Emails,
    Sms,
}

/// What [`log_messages`] handled before stopping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplexReport {
    pub emails: usize,
    pub sms: usize,
    pub closed: ClosedStream,
}

pub fn log_email(email: &str, transcript: &Transcript) {
    transcript.line(format!("Email: {email}"));
}

pub fn log_sms(sms: &str, transcript: &Transcript) {
    transcript.line(format!("SMS: {sms}"));
}

/// Log every email and SMS as it arrives, returning as soon as either stream
/// closes. Which value goes first when both are ready is arbitrary.
pub fn log_messages(
    emails: &RecvChan<String>,
    sms: &RecvChan<String>,
    transcript: &Transcript,
) -> MultiplexReport {
    let (mut email_count, mut sms_count) = (0, 0);
    let closed = loop {
        match select2_recv(emails, sms) {
            Select2Result::First(email) => {
                log_email(&email, transcript);
                email_count += 1;
            }
            Select2Result::Second(text) => {
                log_sms(&text, transcript);
                sms_count += 1;
            }
            Select2Result::FirstClosed => break ClosedStream::Emails,
            Select2Result::SecondClosed => break ClosedStream::Sms,
        }
    };

    tracing::debug!(?closed, email_count, sms_count, "multiplexer stopped");
    MultiplexReport {
        emails: email_count,
        sms: sms_count,
        closed,
    }
}

/// The lesson's original loop body: one select, then return whatever fired.
///
/// It leaves the loop after the first value even though neither stream has
/// closed. Kept to show the difference from [`log_messages`].
pub fn log_first_message(
    emails: &RecvChan<String>,
    sms: &RecvChan<String>,
    transcript: &Transcript,
) -> Select2Result<String, String> {
    let result = select2_recv(emails, sms);
    match &result {
        Select2Result::First(email) => log_email(email, transcript),
        Select2Result::Second(text) => log_sms(text, transcript),
        Select2Result::FirstClosed | Select2Result::SecondClosed => {}
    }
    result
}

fn produce(
    stream: &'static str,
    messages: Vec<String>,
    pause: Duration,
    tx: SendChan<String>,
) -> Result<(), DemoError> {
    for message in messages {
        thread::sleep(pause);
        if tx.send(message).is_err() {
            tracing::debug!(stream, "multiplexer stopped listening");
            return Ok(());
        }
    }
    tx.close();
    Ok(())
}

/// Two producers at different paces; the faster one finishes first and its
/// closure ends the loop.
pub fn multiplex_demo(transcript: &Transcript) -> Result<MultiplexReport, DemoError> {
    let (email_tx, email_rx) = rendezvous::<String>();
    let (sms_tx, sms_rx) = rendezvous::<String>();

    let emails = vec!["Hi Alex, the report is attached".to_string(), "Lunch at noon?".to_string()];
    let texts = vec![
        "Your code is 4821".to_string(),
        "Running late".to_string(),
        "On my way".to_string(),
        "Call me".to_string(),
    ];

    let email_task = spawn(move || produce("email", emails, Duration::from_millis(5), email_tx))?;
    let sms_task = spawn(move || produce("sms", texts, Duration::from_millis(40), sms_tx))?;

    let report = log_messages(&email_rx, &sms_rx, transcript);

    // Unblock whichever producer is still waiting to send.
    drop(email_rx);
    drop(sms_rx);
    email_task.join()??;
    sms_task.join()??;
    Ok(report)
}
