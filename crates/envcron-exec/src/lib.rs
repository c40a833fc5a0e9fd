//! `envcron-exec`: the command execution capability.
//!
//! The scheduler never spawns processes itself; it goes through the
//! [`CommandRunner`] trait, which has exactly one operation. The default
//! [`ShellRunner`] hands the command line to a shell and captures combined
//! stdout/stderr. Tests substitute a recording stub through the same seam
//! without touching any timer logic.

pub mod error;
pub mod runner;

pub use error::{ExecError, Result};
pub use runner::{CommandRunner, ExecResult, ShellRunner};
