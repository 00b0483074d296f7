//! Error handling for the cmdbar library.
//!
//! Only lifecycle misuse is reported as an error. Everything else a caller
//! can get wrong once a session is running (overshooting the total, stopping
//! twice, advancing while idle) is a defined no-op, and terminal failures are
//! degraded silently.

use thiserror::Error;

/// Errors that can happen when driving a [`Session`](crate::Session).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [`Session::start`](crate::Session::start) was called with a total of zero.
    ///
    /// The session is left untouched.
    #[error("Progress total is zero.")]
    ZeroTotal,

    /// An advance was requested before a successful
    /// [`Session::start`](crate::Session::start).
    #[error("Progress total is zero. Call start() first.")]
    NotStarted,
}

/// Result type alias for operations that can fail with a cmdbar error.
pub type Result<T> = std::result::Result<T, Error>;
