//! ANSI escape sequence terminal over any writer.

use super::{log_error, Terminal, ACCENT_COLOR, HIDE_CURSOR, RESET_COLOR, SHOW_CURSOR};
use std::io::{self, Write};

/// A [`Terminal`] controlling cursor and color with ANSI escape sequences
/// written inline to `W`.
///
/// Whether `W` is interactive is decided by the caller; when it is not, no
/// escape sequence is ever written.
///
/// ```rust
/// use cmdbar::terminal::{AnsiTerminal, Terminal};
///
/// let mut terminal = AnsiTerminal::new(Vec::new(), true);
/// let colored = terminal.begin_accent_color();
/// terminal.write_str("==>").unwrap();
/// terminal.end_accent_color(colored);
/// assert_eq!(terminal.into_inner(), b"\x1b[94m==>\x1b[0m");
/// ```
#[derive(Debug)]
pub struct AnsiTerminal<W: Write> {
    writer: W,
    interactive: bool,
}

impl<W: Write> AnsiTerminal<W> {
    /// Wrap `writer`, treating it as interactive or not.
    pub fn new(writer: W, interactive: bool) -> Self {
        Self {
            writer,
            interactive,
        }
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutable access to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the terminal and hand back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, sequence: &str, action: &str) -> bool {
        log_error(action, self.writer.write_all(sequence.as_bytes()))
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn hide_cursor(&mut self) {
        if self.interactive && self.emit(HIDE_CURSOR, "hide cursor") {
            log_error("flush after hiding cursor", self.writer.flush());
        }
    }

    fn show_cursor(&mut self) {
        if self.interactive && self.emit(SHOW_CURSOR, "show cursor") {
            log_error("flush after showing cursor", self.writer.flush());
        }
    }

    fn begin_accent_color(&mut self) -> bool {
        self.interactive && self.emit(ACCENT_COLOR, "set accent color")
    }

    fn end_accent_color(&mut self, colored: bool) {
        if colored {
            self.emit(RESET_COLOR, "reset color");
        }
    }
}
