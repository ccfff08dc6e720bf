//! Ping-pong: two tasks alternate signals over a pair of unbuffered
//! channels; closing cascades from the pinger to the ponger to the caller.

use std::thread;
use std::time::Duration;

use tour_channel::{rendezvous, RecvChan, SendChan};
use tour_runtime::spawn;

use crate::{DemoError, DemoTimings, Transcript};

/// Play `num_pings` rounds and return how many pongs came back.
pub fn ping_pong(
    num_pings: usize,
    first_delay: Duration,
    transcript: &Transcript,
) -> Result<usize, DemoError> {
    let (pings_tx, pings_rx) = rendezvous::<()>();
    let (pongs_tx, pongs_rx) = rendezvous::<()>();

    let out = transcript.clone();
    let pinger_task = spawn(move || pinger(pings_tx, num_pings, first_delay, &out))?;
    let out = transcript.clone();
    let ponger_task = spawn(move || ponger(pings_rx, pongs_tx, &out))?;

    let mut pongs = 0;
    for () in &pongs_rx {
        transcript.line(format!("got pong {pongs}"));
        pongs += 1;
    }
    transcript.line("pongs done");

    pinger_task.join()??;
    ponger_task.join()??;
    Ok(pongs)
}

pub fn ping_pong_concurrency(
    num_pings: usize,
    timings: &DemoTimings,
    transcript: &Transcript,
) -> Result<usize, DemoError> {
    transcript.line("Starting game...");
    let pongs = ping_pong(num_pings, timings.first_ping_delay(), transcript)?;
    transcript.line("===== Game over =====");
    Ok(pongs)
}

fn pinger(
    pings: SendChan<()>,
    num_pings: usize,
    first_delay: Duration,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    let mut delay = first_delay;
    for i in 0..num_pings {
        transcript.line(format!("sending ping {i}"));
        pings
            .send(())
            .map_err(|_| DemoError::ReceiverGone { stream: "ping" })?;
        thread::sleep(delay);
        delay = delay.saturating_mul(2);
    }
    pings.close();
    Ok(())
}

fn ponger(
    pings: RecvChan<()>,
    pongs: SendChan<()>,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    for (i, ()) in pings.iter().enumerate() {
        transcript.line(format!("got ping {i}, sending pong {i}"));
        pongs
            .send(())
            .map_err(|_| DemoError::ReceiverGone { stream: "pong" })?;
    }
    transcript.line("pings done");
    pongs.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_ping_gets_a_pong() {
        let transcript = Transcript::capture();
        let pongs = ping_pong_concurrency(4, &DemoTimings::fast(), &transcript).unwrap();
        assert_eq!(pongs, 4);

        let lines = transcript.lines();
        assert_eq!(lines.first().map(String::as_str), Some("Starting game..."));
        assert_eq!(lines.last().map(String::as_str), Some("===== Game over ====="));
        assert_eq!(lines.len(), 2 + 3 * 4 + 2);
    }

    #[test]
    fn test_round_order() {
        let transcript = Transcript::capture();
        ping_pong(3, Duration::from_millis(1), &transcript).unwrap();

        for i in 0..3 {
            let ping = transcript.position(&format!("sending ping {i}")).unwrap();
            let got = transcript
                .position(&format!("got ping {i}, sending pong {i}"))
                .unwrap();
            let pong = transcript.position(&format!("got pong {i}")).unwrap();
            assert!(ping < got && got < pong, "round {i} out of order");
        }

        // Closing cascades: pinger, then ponger, then the caller.
        let pings_done = transcript.position("pings done").unwrap();
        let pongs_done = transcript.position("pongs done").unwrap();
        assert!(transcript.position("got ping 2, sending pong 2").unwrap() < pings_done);
        assert!(pings_done < pongs_done);
        assert_eq!(pongs_done, transcript.lines().len() - 1);
    }

    #[test]
    fn test_zero_rounds() {
        let transcript = Transcript::capture();
        assert_eq!(ping_pong(0, Duration::ZERO, &transcript).unwrap(), 0);
        assert_eq!(transcript.lines(), vec!["pings done", "pongs done"]);
    }
}
