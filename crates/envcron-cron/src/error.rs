//! Error types for the envcron-cron crate.

use thiserror::Error;

/// All errors that can arise while parsing schedule expressions.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A token that should have been an integer was not.
    #[error("invalid integer `{token}`: {source}")]
    InvalidInteger {
        token: String,
        source: std::num::ParseIntError,
    },

    /// A single-value field lies outside its permitted range.
    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: u32, min: u32, max: u32 },

    /// An `@name` expression that is not in the special-schedule table.
    #[error("unknown special schedule: {0}")]
    UnknownSpecial(String),

    /// A cron expression with fewer than the required five fields.
    #[error("invalid cron expression: expected 5 fields, got {0}")]
    TooFewFields(usize),

    /// An `@every` duration that the duration grammar rejects.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A task definition line too short to hold a schedule and a command.
    #[error("invalid task definition: {0}")]
    InvalidTask(String),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ParseError>;
