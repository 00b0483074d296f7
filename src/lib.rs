//! cmdbar is a small single-line progress bar for command-line tools.
//!
//! Give it a label and a known number of steps; it redraws one line as the
//! steps complete and prints the elapsed time when the run ends.
//!
//! ```text
//! Copying files                       [=========================>                        ] 50%
//! Copying files                       [==================================================] 100%  ->  2 seconds
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cmdbar::SessionBuilder;
//!
//! # fn main() -> Result<(), cmdbar::Error> {
//! let files = ["a.txt", "b.txt", "c.txt"];
//! let mut progress = SessionBuilder::new().build();
//!
//! progress.start("Copying files", files.len() as u64)?;
//! for _file in files {
//!     // ... copy the file ...
//!     progress.advance()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`session`] - The [`Session`] lifecycle, its builder and configuration
//! - [`render`] - Line formatting, percentage arithmetic and duration text
//! - [`terminal`] - Cursor and color control behind the [`Terminal`] trait
//! - [`error`] - The [`Error`] enum for lifecycle misuse

pub mod error;
pub mod render;
pub mod session;
pub mod terminal;

pub use error::{Error, Result};
pub use render::{format_bar, format_duration};
pub use session::{Session, SessionBuilder, SessionConfig};
pub use terminal::{AnsiTerminal, BufferTerminal, StdoutTerminal, Terminal};
