//! In-memory terminal.

use super::{Terminal, ACCENT_COLOR, HIDE_CURSOR, RESET_COLOR, SHOW_CURSOR};
use std::io;

/// A [`Terminal`] that records everything written to it.
///
/// [`BufferTerminal::new`] behaves like redirected output: no escape
/// sequences, no cursor changes. [`BufferTerminal::interactive`] behaves like
/// an ANSI terminal and records the sequences it would have sent.
#[derive(Debug, Clone, Default)]
pub struct BufferTerminal {
    output: String,
    interactive: bool,
    cursor_hidden: bool,
}

impl BufferTerminal {
    /// Create a non-interactive buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that reports itself as an interactive ANSI terminal.
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::default()
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the recorded output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// One entry per carriage-return redraw, in order.
    ///
    /// Text written before the first carriage return is not a frame.
    pub fn frames(&self) -> Vec<&str> {
        self.output.split('\r').skip(1).collect()
    }

    /// Whether the cursor is currently hidden.
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }
}

impl Terminal for BufferTerminal {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.output.push_str(s);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn hide_cursor(&mut self) {
        if self.interactive {
            self.output.push_str(HIDE_CURSOR);
            self.cursor_hidden = true;
        }
    }

    fn show_cursor(&mut self) {
        if self.interactive {
            self.output.push_str(SHOW_CURSOR);
            self.cursor_hidden = false;
        }
    }

    fn begin_accent_color(&mut self) -> bool {
        if self.interactive {
            self.output.push_str(ACCENT_COLOR);
        }
        self.interactive
    }

    fn end_accent_color(&mut self, colored: bool) {
        if colored {
            self.output.push_str(RESET_COLOR);
        }
    }
}
