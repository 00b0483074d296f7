//! Configuration for a progress session.
//!
//! ```rust
//! use cmdbar::session::SessionConfig;
//!
//! let config = SessionConfig::default();
//! assert_eq!(config.label_width, SessionConfig::LABEL_WIDTH);
//! assert_eq!(config.bar_width, SessionConfig::BAR_WIDTH);
//! assert!(!config.idle);
//! ```

/// Layout and mode of a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Width of the label field in characters. Longer labels are cut.
    pub label_width: usize,
    /// Number of cells between the brackets of the bar.
    pub bar_width: usize,
    /// Start in idle mode, with all terminal output suppressed.
    pub idle: bool,
}

impl SessionConfig {
    /// Default label field width.
    pub const LABEL_WIDTH: usize = 35;
    /// Default bar width.
    pub const BAR_WIDTH: usize = 50;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            label_width: Self::LABEL_WIDTH,
            bar_width: Self::BAR_WIDTH,
            idle: false,
        }
    }
}
