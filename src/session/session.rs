//! The progress session state machine.

use super::config::SessionConfig;
use crate::error::{Error, Result};
use crate::render::{fit_label, percent_of, Renderer};
use crate::terminal::Terminal;

use std::io;
use std::time::Instant;
use tracing::debug;

/// One progress bar, from `start` to `stop`, drawn on a [`Terminal`].
///
/// A session is `Cleared` until [`Session::start`], then `Running` until it
/// reaches 100% or [`Session::stop`] is called, after which it is `Stopped`.
/// Stopped and cleared share the same reset fields; the next `start` runs
/// again. Idle mode overlays every state and suppresses all terminal I/O.
///
/// Only one session should drive a given output stream at a time: two live
/// sessions on the same terminal overwrite each other's line. All mutation
/// goes through `&mut self`, so sharing one across threads needs a lock owned
/// by the caller.
pub struct Session<T: Terminal> {
    config: SessionConfig,
    renderer: Renderer,
    terminal: T,
    label: String,
    total: u64,
    step: u64,
    percent: u64,
    started_at: Instant,
    idle: bool,
    stopped: bool,
}

impl<T: Terminal> Session<T> {
    /// Create a cleared session drawing on `terminal`.
    pub fn new(config: SessionConfig, terminal: T) -> Self {
        Self {
            renderer: Renderer::new(config.label_width, config.bar_width),
            idle: config.idle,
            config,
            terminal,
            label: String::new(),
            total: 0,
            step: 0,
            percent: 0,
            started_at: Instant::now(),
            stopped: false,
        }
    }

    /// Start a new run of `total` steps and draw it at 0%.
    ///
    /// Fails with [`Error::ZeroTotal`] if `total` is zero, leaving the
    /// session untouched.
    pub fn start(&mut self, label: &str, total: u64) -> Result<()> {
        if total == 0 {
            return Err(Error::ZeroTotal);
        }

        self.clear();
        self.hide_cursor();

        self.label = fit_label(label, self.config.label_width);
        self.total = total;
        self.started_at = Instant::now();
        debug!("Starting progress {:?} with {} steps", self.label, total);

        self.render(0);
        Ok(())
    }

    /// Advance by one step.
    pub fn advance(&mut self) -> Result<()> {
        if self.idle || self.stopped {
            return Ok(());
        }
        if self.total == 0 {
            return Err(Error::NotStarted);
        }

        self.step += 1;
        self.advance_to(self.step)
    }

    /// Advance to the absolute step `step`.
    ///
    /// Steps past the total are ignored and reaching the total stops the
    /// session. The percentage never goes down: the line is only redrawn when
    /// the rounded percentage grows.
    /// Fails with [`Error::NotStarted`] if no run is in progress.
    pub fn advance_to(&mut self, step: u64) -> Result<()> {
        if self.idle || self.stopped {
            return Ok(());
        }
        if self.total == 0 {
            return Err(Error::NotStarted);
        }

        if step > self.total {
            return Ok(());
        }
        if step == self.total {
            self.stop();
            return Ok(());
        }

        let percent = percent_of(step, self.total);
        if percent <= self.percent {
            return Ok(());
        }

        self.percent = percent;
        if percent == 100 {
            self.stop();
        } else {
            self.render(percent);
        }
        Ok(())
    }

    /// Draw the bar at 100%, print the elapsed time and reset.
    ///
    /// Does nothing when idle or already stopped.
    pub fn stop(&mut self) {
        if self.idle || self.stopped {
            return;
        }

        self.render(100);

        let elapsed = self.started_at.elapsed();
        debug!("Progress {:?} finished in {:?}", self.label, elapsed);
        let summary = self.renderer.summary(&mut self.terminal, elapsed);
        log_write_error(summary);

        self.clear();
        self.show_cursor();
        self.stopped = true;
    }

    /// Reset to the cleared state without printing anything.
    ///
    /// Leaves idle mode and the cursor alone.
    pub fn clear(&mut self) {
        self.stopped = false;
        self.label.clear();
        self.total = 0;
        self.step = 0;
        self.percent = 0;
    }

    /// Turn idle mode on or off.
    ///
    /// Turning it on gives the cursor back first.
    pub fn set_idle(&mut self, idle: bool) {
        if idle {
            self.show_cursor();
        }
        debug!("Progress idle mode {}", if idle { "on" } else { "off" });
        self.idle = idle;
    }

    /// Whether idle mode is on.
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Whether the last run stopped and no new one started.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.total > 0 && !self.stopped
    }

    /// The label of the current run, already fitted to the label field.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The total of the current run, zero when cleared.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The last percentage drawn in the current run.
    pub fn percent(&self) -> u64 {
        self.percent
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The terminal being drawn on.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Mutable access to the terminal being drawn on.
    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Consume the session and hand back its terminal.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    fn render(&mut self, percent: u64) {
        if self.idle || self.stopped {
            return;
        }
        let drawn = self.renderer.draw(&mut self.terminal, &self.label, percent);
        log_write_error(drawn);
    }

    fn hide_cursor(&mut self) {
        if !self.idle {
            self.terminal.hide_cursor();
        }
    }

    fn show_cursor(&mut self) {
        if !self.idle {
            self.terminal.show_cursor();
        }
    }
}

impl<T: Terminal + std::fmt::Debug> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("terminal", &self.terminal)
            .field("label", &self.label)
            .field("total", &self.total)
            .field("step", &self.step)
            .field("percent", &self.percent)
            .field("idle", &self.idle)
            .field("stopped", &self.stopped)
            .finish()
    }
}

fn log_write_error(result: io::Result<()>) {
    if let Err(e) = result {
        debug!("Failed to draw progress: {}", e);
    }
}
