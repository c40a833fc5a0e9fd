//! `envcron-cron`: cron expression parsing and time matching.
//!
//! # Overview
//!
//! Turns schedule expressions into [`Schedule`] values that the dispatch
//! runtime evaluates against wall-clock time. Parsing happens once at load
//! time; everything produced here is immutable afterwards.
//!
//! # Expression forms
//!
//! | Form              | Example            | Behaviour                           |
//! |-------------------|--------------------|-------------------------------------|
//! | 5-field cron      | `*/15 0 1 * 1`     | Calendar schedule, matched per tick |
//! | Special name      | `@daily`           | Expands to a fixed 5-field form     |
//! | Interval          | `@every 1h30m`     | Repeating fixed-duration timer      |
//!
//! Day-of-week accepts `7` as an alias for `0` (Sunday); no other weekday
//! has an alias. Day-of-month and day-of-week combine with AND, not the OR
//! some cron dialects use when both fields are restricted.

pub mod error;
pub mod field;
pub mod parse;
pub mod types;

pub use error::{ParseError, Result};
pub use field::parse_field;
pub use parse::{parse_every, parse_schedule, parse_task, split_definition};
pub use types::{CalendarFields, FieldRange, Schedule, Task};
