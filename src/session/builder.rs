//! Builder for [`Session`] instances.
//!
//! # Examples
//!
//! ## Default Layout on Standard Output
//!
//! ```rust,no_run
//! use cmdbar::SessionBuilder;
//!
//! let mut session = SessionBuilder::new().build();
//! session.start("Copying files", 10)?;
//! # Ok::<(), cmdbar::Error>(())
//! ```
//!
//! ## Narrow Layout Rendered in Memory
//!
//! ```rust
//! use cmdbar::{terminal::BufferTerminal, SessionBuilder};
//!
//! let mut session = SessionBuilder::new()
//!     .label_width(8)
//!     .bar_width(10)
//!     .build_with(BufferTerminal::new());
//! session.start("Copy", 2)?;
//! assert_eq!(session.terminal().frames(), vec!["Copy     [>         ] 0%"]);
//! # Ok::<(), cmdbar::Error>(())
//! ```
//!
//! ## Silent Runs
//!
//! ```rust
//! use cmdbar::SessionBuilder;
//!
//! // Nothing is drawn and the cursor is never touched.
//! let session = SessionBuilder::hidden().build();
//! assert!(session.is_idle());
//! ```

use super::{config::SessionConfig, session::Session};
use crate::terminal::{StdoutTerminal, Terminal};

/// A builder used to create a [`Session`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        SessionBuilder::default()
    }

    /// Convenience function for a session that starts idle.
    pub fn hidden() -> Self {
        SessionBuilder::default().idle(true)
    }

    /// Set the width of the label field.
    pub fn label_width(mut self, label_width: usize) -> Self {
        self.config.label_width = label_width;
        self
    }

    /// Set the number of cells in the bar.
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.config.bar_width = bar_width;
        self
    }

    /// Start in idle mode.
    pub fn idle(mut self, idle: bool) -> Self {
        self.config.idle = idle;
        self
    }

    /// Create a [`Session`] drawing on standard output.
    pub fn build(self) -> Session<StdoutTerminal> {
        Session::new(self.config, StdoutTerminal::new())
    }

    /// Create a [`Session`] drawing on the given terminal.
    pub fn build_with<T: Terminal>(self, terminal: T) -> Session<T> {
        Session::new(self.config, terminal)
    }
}
