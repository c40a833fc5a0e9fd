//! `envcron-core`: configuration and the top-level error type.

pub mod config;
pub mod error;

pub use config::{EnvcronConfig, SchedulerConfig, TaskEntry};
pub use error::{EnvcronError, Result};
