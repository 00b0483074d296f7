//! Terminal capability interface.
//!
//! A [`Session`](crate::Session) never talks to stdout directly. It goes
//! through a [`Terminal`], which owns two capabilities that are each gated on
//! the output being an interactive terminal:
//!
//! - cursor visibility, hidden for the lifetime of a session and restored when
//!   it stops;
//! - the accent color, switched on and off around the bar glyphs of a single
//!   redraw.
//!
//! # Implementations
//!
//! - [`StdoutTerminal`] writes to the process standard output, using either the
//!   native console API or ANSI escape sequences (see [`Backend`]).
//! - [`AnsiTerminal`] writes ANSI escape sequences to any [`std::io::Write`].
//! - [`BufferTerminal`] keeps everything in memory, which is what tests and
//!   headless captures use.
//!
//! # Examples
//!
//! ```rust
//! use cmdbar::terminal::{BufferTerminal, Terminal};
//!
//! let mut terminal = BufferTerminal::new();
//! terminal.write_str("\rhello").unwrap();
//!
//! // A non-interactive terminal refuses color and cursor changes.
//! assert!(!terminal.begin_accent_color());
//! assert_eq!(terminal.frames(), vec!["hello"]);
//! ```

pub(crate) mod ansi;
pub(crate) mod buffer;
pub(crate) mod native;
pub(crate) mod stdout;

pub use ansi::AnsiTerminal;
pub use buffer::BufferTerminal;
pub use stdout::{Backend, StdoutTerminal};

use std::io;
use tracing::debug;

/// Output stream plus the cursor and color controls a progress bar needs.
///
/// Capability methods must degrade silently: on a non-interactive stream,
/// `hide_cursor` and `show_cursor` do nothing and `begin_accent_color`
/// returns `false`.
pub trait Terminal {
    /// Write raw text to the stream.
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Flush anything buffered so far.
    fn flush(&mut self) -> io::Result<()>;

    /// Whether the stream is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Hide the cursor.
    fn hide_cursor(&mut self);

    /// Show the cursor.
    fn show_cursor(&mut self);

    /// Switch the foreground color to the accent color.
    ///
    /// Returns `true` if the color was actually changed. The result must be
    /// handed back to [`Terminal::end_accent_color`] within the same redraw.
    fn begin_accent_color(&mut self) -> bool;

    /// Restore the color saved by [`Terminal::begin_accent_color`], but only
    /// if `colored` says it succeeded.
    fn end_accent_color(&mut self, colored: bool);
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn hide_cursor(&mut self) {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) {
        (**self).show_cursor()
    }

    fn begin_accent_color(&mut self) -> bool {
        (**self).begin_accent_color()
    }

    fn end_accent_color(&mut self, colored: bool) {
        (**self).end_accent_color(colored)
    }
}

/// ANSI sequence hiding the cursor.
pub(crate) const HIDE_CURSOR: &str = "\x1b[?25l";
/// ANSI sequence showing the cursor.
pub(crate) const SHOW_CURSOR: &str = "\x1b[?25h";
/// ANSI sequence for a bright blue foreground.
pub(crate) const ACCENT_COLOR: &str = "\x1b[94m";
/// ANSI sequence resetting all attributes.
pub(crate) const RESET_COLOR: &str = "\x1b[0m";

/// Log a failed terminal operation and report whether it succeeded.
pub(crate) fn log_error(action: &str, result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to {}: {}", action, e);
            false
        }
    }
}
