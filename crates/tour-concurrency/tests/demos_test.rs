//! End-to-end runs of the exercises through the public API.

use pretty_assertions::assert_eq;
use tour_concurrency::{fibonacci, reports, run_all, Demo, DemoTimings, Transcript, DEFAULT_PINGS};

#[test]
fn test_run_all_with_fast_timings() {
    let transcript = Transcript::capture();
    run_all(&DemoTimings::fast(), DEFAULT_PINGS, &transcript).unwrap();

    for expected in [
        "Email sent: 'Hello there Kaladin!'",
        "Email received: 'Hello there Kaladin!'",
        "Old emails: [true, false, false]",
        "3 databases online, server starting",
        "Sending email msg: Bye",
        "--- The total of reports to send are: 1035 ---",
        "Fibonacci: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]",
        "===== Game over =====",
        "lane@example.com was sent 100 emails",
    ] {
        assert!(
            transcript.position(expected).is_some(),
            "missing line {expected:?} in {:#?}",
            transcript.lines()
        );
    }

    let game_start = transcript.position("Starting game...").unwrap();
    let game_over = transcript.position("===== Game over =====").unwrap();
    assert!(game_start < game_over);
}

#[test]
fn test_each_demo_runs_alone() {
    for demo in Demo::ALL {
        let transcript = Transcript::capture();
        demo.run(&DemoTimings::fast(), 1, &transcript).unwrap();
        assert!(!transcript.lines().is_empty(), "{demo} printed nothing");
    }
}

#[test]
fn test_reruns_are_identical() {
    let first = fibonacci::concurrent_fib(20).unwrap();
    let second = fibonacci::concurrent_fib(20).unwrap();
    assert_eq!(first, second);

    let a = Transcript::capture();
    let b = Transcript::capture();
    let total_a = reports::manage_reports_concurrently(reports::DEFAULT_BATCHES, &a).unwrap();
    let total_b = reports::manage_reports_concurrently(reports::DEFAULT_BATCHES, &b).unwrap();
    assert_eq!(total_a, total_b);
    assert_eq!(a.lines(), b.lines());
}
