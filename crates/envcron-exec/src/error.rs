//! Error types for the envcron-exec crate.

use thiserror::Error;

/// All errors that can originate from command execution.
///
/// A command that runs and exits non-zero is NOT an error here; the exit
/// code travels back in the result and the caller decides what to log.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The child process could not be spawned.
    #[error("spawn error: {0}")]
    Spawn(String),

    /// Underlying I/O failure while waiting for or reading from the child.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExecError>;
