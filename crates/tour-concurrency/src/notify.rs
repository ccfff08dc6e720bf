//! Fire-and-forget: print now, print again later from a background task.

use std::thread;
use std::time::Duration;

use tour_runtime::{spawn, Task};

use crate::{DemoError, DemoTimings, Transcript};

/// Messages sent by [`send_emails_concurrently`].
pub const MESSAGES: [&str; 3] = ["Hello there Kaladin!", "Hi there Shallan!", "Hey there Dalinar!"];

/// Separator printed after each message.
pub const SEPARATOR: &str = "========================";

/// Print `Email sent` right away and schedule `Email received` after `delay`.
///
/// Returns as soon as the immediate line is written. The returned task
/// finishes only after the delayed line; dropping or detaching it means the
/// delayed line is lost if the process exits first.
pub fn send_email(
    message: &str,
    delay: Duration,
    transcript: &Transcript,
) -> Result<Task<()>, DemoError> {
    let received = format!("Email received: '{message}'");
    let out = transcript.clone();
    let task = spawn(move || {
        thread::sleep(delay);
        out.line(received);
    })?;

    transcript.line(format!("Email sent: '{message}'"));
    Ok(task)
}

/// Send one email, then wait a fixed grace period instead of joining.
///
/// If the background task is still running after the grace period it is
/// detached, and its line may never appear.
pub fn send_with_grace(
    message: &str,
    timings: &DemoTimings,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    let task = send_email(message, timings.notify_delay(), transcript)?;
    thread::sleep(timings.notify_grace());

    if task.is_finished() {
        task.join()?;
    } else {
        tracing::warn!(message, "grace period elapsed before delivery");
        task.detach();
    }
    transcript.line(SEPARATOR);
    Ok(())
}

pub fn send_emails_concurrently(
    timings: &DemoTimings,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    for message in MESSAGES {
        send_with_grace(message, timings, transcript)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sent_is_printed_before_received() {
        let transcript = Transcript::capture();
        let task = send_email("hi", Duration::from_millis(20), &transcript).unwrap();

        // Returned immediately: only the first line so far.
        assert_eq!(transcript.lines(), vec!["Email sent: 'hi'"]);

        task.join().unwrap();
        assert_eq!(
            transcript.lines(),
            vec!["Email sent: 'hi'", "Email received: 'hi'"]
        );
    }

    #[test]
    fn test_demo_prints_all_messages_in_order() {
        let transcript = Transcript::capture();
        send_emails_concurrently(&DemoTimings::fast(), &transcript).unwrap();

        let expected: Vec<String> = MESSAGES
            .iter()
            .flat_map(|m| {
                [
                    format!("Email sent: '{m}'"),
                    format!("Email received: '{m}'"),
                    SEPARATOR.to_string(),
                ]
            })
            .collect();
        assert_eq!(transcript.lines(), expected);
    }

    #[test]
    fn test_short_grace_detaches() {
        let timings = DemoTimings {
            notify_delay_ms: 200,
            notify_grace_ms: 0,
            ..DemoTimings::fast()
        };
        let transcript = Transcript::capture();
        send_with_grace("late", &timings, &transcript).unwrap();

        assert_eq!(transcript.lines(), vec!["Email sent: 'late'", SEPARATOR]);
    }
}
