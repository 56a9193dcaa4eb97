// tests/integration_demo.rs
use chatline_core::agent::Pacer;
use chatline_core::demo;
use chatline_core::status::{DisplayOptions, MemorySink, StatusDisplay, StatusKind};

#[test]
fn test_demo_runs_every_scripted_request() {
    let sink = MemorySink::new();
    let display = StatusDisplay::new(sink.clone(), DisplayOptions::default());

    let finished = demo::run(&display, &Pacer::instant()).unwrap();
    assert!(finished);

    let out = sink.contents();
    assert!(out.contains("AGENT DEMONSTRATION"));
    for request in demo::TASK_REQUESTS {
        assert!(out.contains(&format!("Request: '{request}'")));
    }
    assert!(out.contains("  result: 84\n"));
    assert!(out.contains("  result: No arithmetic expression found\n"));
    assert!(out.contains("  processed: PROCESS THIS TEXT WORD BY WORD\n"));
    assert_eq!(out.matches("RESULT:").count(), 6);

    let successes = display
        .history()
        .iter()
        .filter(|e| e.kind() == StatusKind::Success)
        .count();
    assert_eq!(successes, 6);
    assert_eq!(display.live_spinners(), 0);
}

#[test]
fn test_demo_stops_on_interrupt() {
    let sink = MemorySink::new();
    let display = StatusDisplay::new(sink.clone(), DisplayOptions::default());
    let (tx, rx) = crossbeam_channel::bounded(1);
    tx.send(()).unwrap();

    let finished = demo::run(&display, &Pacer::instant().with_interrupts(rx)).unwrap();
    assert!(!finished);
    assert!(sink.contents().contains("Interrupted by user. Exiting..."));
    assert!(!sink.contents().contains("RESULT:"));
}
