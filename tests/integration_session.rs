// tests/integration_session.rs
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use chatline_core::agent::{Agent, AgentKind, Pacer, ResultRecord, TaskContext};
use chatline_core::error::{DisplayError, TaskError};
use chatline_core::session::{Input, Session, SessionEnd};
use chatline_core::status::{DisplayOptions, MemorySink, StatusDisplay, StatusKind};

struct Harness {
    display: StatusDisplay,
    sink: MemorySink,
    line_tx: Sender<String>,
    line_rx: Receiver<String>,
    int_tx: Sender<()>,
    int_rx: Receiver<()>,
}

impl Harness {
    fn new(lines: &[&str]) -> Self {
        let sink = MemorySink::new();
        let display = StatusDisplay::new(sink.clone(), DisplayOptions::default());
        let (line_tx, line_rx) = unbounded();
        for line in lines {
            line_tx.send((*line).to_string()).unwrap();
        }
        let (int_tx, int_rx) = bounded(1);
        Self {
            display,
            sink,
            line_tx,
            line_rx,
            int_tx,
            int_rx,
        }
    }

    fn run(&self, agent: Box<dyn Agent + Send>, pace: f64) -> Result<SessionEnd, DisplayError> {
        let pacer = Pacer::new(pace).with_interrupts(self.int_rx.clone());
        Session::new(
            &self.display,
            agent,
            pacer,
            self.line_rx.clone(),
            self.int_rx.clone(),
        )
        .run()
    }
}

/// Fails on every request.
struct FailingAgent;

impl Agent for FailingAgent {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn process(&mut self, _request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
        cx.status.start_spinner("about to fail")?;
        Err(anyhow::anyhow!("backend unavailable").into())
    }
}

#[test]
fn test_input_classification() {
    assert_eq!(Input::parse(""), Input::Empty);
    assert_eq!(Input::parse("   \t"), Input::Empty);
    assert_eq!(Input::parse("quit"), Input::Exit);
    assert_eq!(Input::parse("  EXIT "), Input::Exit);
    assert_eq!(Input::parse("Q"), Input::Exit);
    assert_eq!(Input::parse("quit now"), Input::Request("quit now"));
    assert_eq!(Input::parse("  calculate 2+2 "), Input::Request("calculate 2+2"));
}

#[test]
fn test_calculation_end_to_end() {
    let h = Harness::new(&["calculate 2+2", "quit"]);
    let end = h.run(AgentKind::Task.build(), 0.0).unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let kinds: Vec<StatusKind> = h.display.history().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![StatusKind::Thinking, StatusKind::Processing, StatusKind::Success]
    );

    let out = h.sink.contents();
    assert!(out.contains("COMMAND LINE CHAT AGENT"));
    assert!(out.contains("RESULT:"));
    assert!(out.contains("  status: success\n"));
    assert!(out.contains("  result: 4\n"));
    assert!(out.ends_with("You> Goodbye!\n"));
}

#[test]
fn test_empty_lines_reprompt_without_engine_calls() {
    let h = Harness::new(&["", "   ", "quit"]);
    let end = h.run(AgentKind::Task.build(), 0.0).unwrap();
    assert_eq!(end, SessionEnd::Quit);
    assert!(h.display.history().is_empty());
    assert_eq!(h.sink.contents().matches("You> ").count(), 3);
}

#[test]
fn test_exit_keywords_are_case_insensitive() {
    for keyword in ["exit", "QUIT", " Q "] {
        let h = Harness::new(&[keyword]);
        assert_eq!(h.run(AgentKind::Task.build(), 0.0).unwrap(), SessionEnd::Quit);
        assert!(h.sink.contents().ends_with("Goodbye!\n"));
    }
}

#[test]
fn test_result_block_layout() {
    let h = Harness::new(&["hello", "q"]);
    h.run(AgentKind::Basic.build(), 0.0).unwrap();
    let out = h.sink.contents();
    let rule = "=".repeat(50);
    let lines: Vec<&str> = out.lines().collect();
    let at = lines.iter().position(|l| l.contains("RESULT:")).unwrap();
    assert_eq!(lines[at - 2], "");
    assert_eq!(lines[at - 1], rule);
    assert_eq!(lines[at + 1], rule);
    assert_eq!(lines[at + 2], "  status: success");
    assert_eq!(lines[at + 3], "  response: Processed request: 'hello'");
    assert_eq!(lines[at + 4], "  steps_completed: 4");
    assert!(lines[at + 5].starts_with("  processing_time: "));
    assert_eq!(lines[at + 6], rule);
    assert_eq!(lines[at + 7], "");
}

#[test]
fn test_processing_error_is_reported_and_loop_continues() {
    let h = Harness::new(&["calculate 1/0", "calculate 3*3", "quit"]);
    let end = h.run(AgentKind::Task.build(), 0.0).unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let history = h.display.history();
    let error = history
        .iter()
        .find(|e| e.kind() == StatusKind::Error)
        .unwrap();
    assert_eq!(error.message(), "Error: calculation failed: division by zero");

    let out = h.sink.contents();
    assert!(out.contains("❌ Error: calculation failed: division by zero\n"));
    assert!(out.contains("  result: 9\n"));
    assert_eq!(out.matches("RESULT:").count(), 1);
    assert_eq!(h.display.live_spinners(), 0);
}

#[test]
fn test_runaway_nesting_is_reported_and_loop_continues() {
    let nested = format!("calculate {}2", "(".repeat(50_000));
    let h = Harness::new(&[nested.as_str(), "calculate 2*5", "quit"]);
    let end = h.run(AgentKind::Task.build(), 0.0).unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let out = h.sink.contents();
    assert!(out.contains("❌ Error: calculation failed: expression is nested too deeply\n"));
    assert!(out.contains("  result: 10\n"));
}

#[test]
fn test_collaborator_error_stops_its_spinner() {
    let h = Harness::new(&["anything", "quit"]);
    h.run(Box::new(FailingAgent), 0.0).unwrap();
    assert!(!h.display.is_spinning());
    assert!(h
        .sink
        .contents()
        .contains("❌ Error: backend unavailable\n"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let h = Harness::new(&["calculate 2+2"]);
    let Harness {
        display,
        sink,
        line_tx,
        line_rx,
        int_tx: _int_tx,
        int_rx,
    } = h;
    drop(line_tx);

    let pacer = Pacer::instant().with_interrupts(int_rx.clone());
    let end = Session::new(&display, AgentKind::Task.build(), pacer, line_rx, int_rx)
        .run()
        .unwrap();
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(sink.contents().ends_with("You> \nGoodbye!\n"));
}

#[test]
fn test_interrupt_while_waiting_for_input() {
    let h = Harness::new(&[]);
    h.int_tx.send(()).unwrap();
    let end = h.run(AgentKind::Task.build(), 0.0).unwrap();
    assert_eq!(end, SessionEnd::Interrupted);
    assert!(h
        .sink
        .contents()
        .ends_with("\n\nInterrupted by user. Exiting...\n"));
    assert!(h.display.history().is_empty());
}

#[test]
fn test_interrupt_during_processing_stops_spinner() {
    let h = Harness::new(&["search for something"]);
    let int_tx = h.int_tx.clone();
    let trigger = thread::spawn(move || {
        thread::sleep(Duration::from_millis(800));
        int_tx.send(()).unwrap();
    });

    // search: 500ms thinking, then a 1500ms spinner pause
    let end = h.run(AgentKind::Task.build(), 1.0).unwrap();
    trigger.join().unwrap();

    assert_eq!(end, SessionEnd::Interrupted);
    assert!(!h.display.is_spinning());
    assert_eq!(h.display.live_spinners(), 0);
    assert!(h.sink.contents().contains("Interrupted by user. Exiting..."));
    assert!(!h.sink.contents().contains("RESULT:"));
}

#[test]
fn test_dropped_interrupt_source_is_ignored() {
    let h = Harness::new(&["q"]);
    let Harness {
        display,
        sink,
        line_tx: _line_tx,
        line_rx,
        int_tx,
        int_rx,
    } = h;
    drop(int_tx);

    let end = Session::new(
        &display,
        AgentKind::Task.build(),
        Pacer::instant(),
        line_rx,
        int_rx,
    )
    .run()
    .unwrap();
    assert_eq!(end, SessionEnd::Quit);
    assert!(sink.contents().ends_with("Goodbye!\n"));
}

struct ClosedTerminal;

impl Write for ClosedTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_terminal_failure_is_fatal() {
    let display = StatusDisplay::new(ClosedTerminal, DisplayOptions::default());
    let (_line_tx, line_rx) = unbounded::<String>();
    let (_int_tx, int_rx) = bounded::<()>(1);
    let result = Session::new(
        &display,
        AgentKind::Task.build(),
        Pacer::instant(),
        line_rx,
        int_rx,
    )
    .run();
    assert!(matches!(result, Err(DisplayError::Write(_))));
}
