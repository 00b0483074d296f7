//! Standard output terminal.

use super::{log_error, native, AnsiTerminal, Terminal};
use console::Term;
use std::io;

/// How cursor and color control reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The platform console API (Windows console cursor info and text
    /// attributes). On other platforms cursor control goes through
    /// [`console::Term`] and no color is applied.
    NativeConsole,
    /// ANSI escape sequences written inline with the output.
    Ansi,
}

impl Backend {
    /// Pick the backend for the current platform.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Backend::NativeConsole
        } else {
            Backend::Ansi
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::detect()
    }
}

/// A [`Terminal`] writing to the process standard output.
pub struct StdoutTerminal {
    ansi: AnsiTerminal<Term>,
    backend: Backend,
    saved: Option<native::SavedAttributes>,
}

impl StdoutTerminal {
    /// Create a stdout terminal with the backend detected for this platform.
    pub fn new() -> Self {
        Self::with_backend(Backend::detect())
    }

    /// Create a stdout terminal with an explicit backend.
    pub fn with_backend(backend: Backend) -> Self {
        let term = Term::stdout();
        let interactive = term.is_term();
        Self {
            ansi: AnsiTerminal::new(term, interactive),
            backend,
            saved: None,
        }
    }

    /// The backend in use.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    fn term(&self) -> &Term {
        self.ansi.get_ref()
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        if !self.is_interactive() {
            return;
        }

        match self.backend {
            Backend::Ansi if visible => self.ansi.show_cursor(),
            Backend::Ansi => self.ansi.hide_cursor(),
            Backend::NativeConsole => {
                let action = if visible { "show cursor" } else { "hide cursor" };
                log_error(action, native::set_cursor_visible(self.term(), visible));
            }
        }
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StdoutTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdoutTerminal")
            .field("backend", &self.backend)
            .field("interactive", &self.is_interactive())
            .field("colored", &self.saved.is_some())
            .finish()
    }
}

impl Terminal for StdoutTerminal {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.ansi.write_str(s)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ansi.flush()
    }

    fn is_interactive(&self) -> bool {
        self.ansi.is_interactive()
    }

    fn hide_cursor(&mut self) {
        self.set_cursor_visible(false);
    }

    fn show_cursor(&mut self) {
        self.set_cursor_visible(true);
    }

    fn begin_accent_color(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }

        match self.backend {
            Backend::Ansi => self.ansi.begin_accent_color(),
            Backend::NativeConsole => {
                // Text already written must keep the old color.
                if !log_error("flush before accent color", self.ansi.flush()) {
                    return false;
                }
                self.saved = native::begin_accent(self.term());
                self.saved.is_some()
            }
        }
    }

    fn end_accent_color(&mut self, colored: bool) {
        if !colored {
            return;
        }

        match self.backend {
            Backend::Ansi => self.ansi.end_accent_color(colored),
            Backend::NativeConsole => {
                log_error("flush before color reset", self.ansi.flush());
                if let Some(saved) = self.saved.take() {
                    native::restore(self.term(), saved);
                }
            }
        }
    }
}
