//! Exit status and messages of the built binary

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timer-stopwatch"))
        .args(args)
        .output()
        .expect("failed to run timer-stopwatch")
}

#[test]
fn no_mode_exits_with_status_one() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No action specified. Use -t, -s or -i."));
    assert!(output.stdout.is_empty());
}

#[test]
fn timer_and_stopwatch_together_are_rejected() {
    let output = run(&["-t", "1", "-s"]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn negative_timer_is_rejected() {
    let output = run(&["--timer=-3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'-3' is negative"));
}

#[test]
fn zero_second_timer_finishes_at_once() {
    let output = run(&["--timer", "0"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Timer set for 0 seconds...\n\r00:00 - Time is up\n"
    );
}

#[test]
fn stopwatch_stops_at_end_of_input() {
    let output = run(&["--stopwatch"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Stopwatch started. Press Enter or Ctrl+C to stop.\n"));
    assert!(stdout.contains("\nElapsed time: "));
}
