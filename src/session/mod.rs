//! Session module containing the progress state machine, its builder and
//! configuration.
//!
//! # Overview
//!
//! - `session` - the [`Session`] handle with the `start` / `advance` /
//!   `stop` lifecycle
//! - `builder` - [`SessionBuilder`] for configuring a session
//! - `config` - [`SessionConfig`] with the layout defaults
//!
//! # Examples
//!
//! ```rust
//! use cmdbar::{terminal::BufferTerminal, SessionBuilder};
//!
//! let mut session = SessionBuilder::new().build_with(BufferTerminal::new());
//!
//! session.start("Copy", 4)?;
//! for _ in 0..4 {
//!     session.advance()?;
//! }
//!
//! // The fourth step reached the total and stopped the session.
//! assert!(session.is_stopped());
//! assert_eq!(session.terminal().frames().len(), 5);
//! # Ok::<(), cmdbar::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod session;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use session::Session;
