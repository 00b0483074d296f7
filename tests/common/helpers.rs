#![allow(dead_code)]

use cmdbar::terminal::BufferTerminal;
use cmdbar::{Session, SessionBuilder};

// Common test constants
pub const TEST_LABEL: &str = "Copy";
pub const TEST_LABEL_WIDTH: usize = 8;
pub const TEST_BAR_WIDTH: usize = 10;

// === Session Helpers ===

/// Creates a session with the default layout drawing into memory
pub fn create_test_session() -> Session<BufferTerminal> {
    SessionBuilder::new().build_with(BufferTerminal::new())
}

/// Creates a session with a narrow layout so lines are easy to spell out
pub fn create_narrow_session() -> Session<BufferTerminal> {
    SessionBuilder::new()
        .label_width(TEST_LABEL_WIDTH)
        .bar_width(TEST_BAR_WIDTH)
        .build_with(BufferTerminal::new())
}

/// Creates a narrow session on a terminal that accepts cursor and color control
pub fn create_interactive_session() -> Session<BufferTerminal> {
    SessionBuilder::new()
        .label_width(TEST_LABEL_WIDTH)
        .bar_width(TEST_BAR_WIDTH)
        .build_with(BufferTerminal::interactive())
}

/// Creates a narrow session that has already been started
pub fn create_started_session(total: u64) -> Session<BufferTerminal> {
    let mut session = create_narrow_session();
    session
        .start(TEST_LABEL, total)
        .expect("Failed to start test session");
    session
}

// === Frame Helpers ===

/// Extracts the trailing percentage of every redraw
pub fn frame_percents(session: &Session<BufferTerminal>) -> Vec<u64> {
    session
        .terminal()
        .frames()
        .iter()
        .map(|frame| {
            let line = frame.split("  ->  ").next().unwrap_or(frame);
            let percent = line
                .rsplit(' ')
                .next()
                .and_then(|p| p.strip_suffix('%'))
                .expect("Frame should end with a percentage");
            percent.parse().expect("Percentage should be a number")
        })
        .collect()
}

/// Number of summary lines printed so far
pub fn summary_count(session: &Session<BufferTerminal>) -> usize {
    session.terminal().output().matches("  ->  ").count()
}

// === Assertion Helpers ===

/// Asserts that a session is back to its cleared baseline
pub fn assert_cleared(session: &Session<BufferTerminal>) {
    assert_eq!(session.label(), "");
    assert_eq!(session.total(), 0);
    assert_eq!(session.percent(), 0);
    assert!(!session.is_running(), "Session should not be running");
}

/// Asserts that a session stopped and printed exactly one summary
pub fn assert_stopped_once(session: &Session<BufferTerminal>) {
    assert!(session.is_stopped(), "Session should be stopped");
    assert_cleared(session);
    assert_eq!(summary_count(session), 1);
    assert!(session.terminal().output().ends_with('\n'));
}
