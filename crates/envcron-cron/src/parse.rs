//! Full schedule expression parsing.
//!
//! Three entry points:
//! - [`parse_schedule`]: any expression form (5-field cron, special name,
//!   `@every` interval).
//! - [`parse_every`]: the `@every <duration>` interval form.
//! - [`split_definition`]: separates a single-line task definition into
//!   its schedule text and command text.

use crate::error::{ParseError, Result};
use crate::field::parse_field;
use crate::types::{
    CalendarFields, Schedule, Task, DAYS_OF_MONTH, DAYS_OF_WEEK, HOURS, MINUTES, MONTHS,
};

/// `(name, canonical 5-field expansion)` pairs for the special schedules.
const SPECIAL_SCHEDULES: &[(&str, &str)] = &[
    ("@hourly", "0 * * * *"),
    ("@daily", "0 0 * * *"),
    ("@weekly", "0 0 * * 0"),
    ("@monthly", "0 0 1 * *"),
    ("@yearly", "0 0 1 1 *"),
];

/// Parse a complete schedule expression into a [`Schedule`].
///
/// Special names expand to their canonical 5-field form before field
/// parsing. `@every` expressions delegate to [`parse_every`]. Anything else
/// is split on whitespace and must carry at least five fields; extra tokens
/// are ignored here (callers that accept `<schedule> <command>` lines strip
/// the command with [`split_definition`] first).
///
/// # Errors
///
/// - `UnknownSpecial`: an `@name` not in the special table.
/// - `TooFewFields`: fewer than five whitespace-separated fields.
/// - any [`parse_field`] error for the first failing field.
pub fn parse_schedule(expr: &str) -> Result<Schedule> {
    if expr.starts_with("@every") {
        return parse_every(expr);
    }

    let expr = if expr.starts_with('@') {
        match SPECIAL_SCHEDULES.iter().find(|(name, _)| *name == expr) {
            Some((_, expansion)) => *expansion,
            None => return Err(ParseError::UnknownSpecial(expr.to_string())),
        }
    } else {
        expr
    };

    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(ParseError::TooFewFields(fields.len()));
    }

    Ok(Schedule::Calendar(CalendarFields {
        minutes: parse_field(fields[0], MINUTES)?,
        hours: parse_field(fields[1], HOURS)?,
        days_of_month: parse_field(fields[2], DAYS_OF_MONTH)?,
        months: parse_field(fields[3], MONTHS)?,
        days_of_week: parse_field(fields[4], DAYS_OF_WEEK)?,
    }))
}

/// Parse an `@every <duration>` expression.
///
/// A remainder that is exactly `<digits>d` is rewritten to hours first
/// (`2d` → `48h`). The rewrite consumes the whole string or nothing, so
/// compound forms like `1d2h` fail in the duration grammar. Negative and
/// zero durations are accepted without rejection.
pub fn parse_every(expr: &str) -> Result<Schedule> {
    let text = expr.strip_prefix("@every").unwrap_or(expr).trim_start();

    let rewritten;
    let text = match text.strip_suffix('d') {
        Some(days) if !days.is_empty() && days.bytes().all(|b| b.is_ascii_digit()) => {
            let days: i64 = days.parse().map_err(|source| ParseError::InvalidInteger {
                token: days.to_string(),
                source,
            })?;
            rewritten = format!("{}h", days * 24);
            &rewritten
        }
        _ => text,
    };

    Ok(Schedule::Every {
        interval: parse_duration(text)?,
    })
}

/// Quantity+unit duration grammar: one or more `<integer><unit>` segments
/// with `unit` in `h`, `m`, `s`, `ms`, and an optional leading `-` applying
/// to the whole value.
fn parse_duration(text: &str) -> Result<chrono::Duration> {
    let invalid = || ParseError::InvalidDuration(text.to_string());

    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, text),
    };
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total = chrono::Duration::zero();
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        if digits == 0 {
            return Err(invalid());
        }
        let quantity: i64 = rest[..digits].parse().map_err(|_| invalid())?;
        rest = &rest[digits..];

        // `ms` must be matched before `m`.
        let (to_duration, len): (fn(i64) -> chrono::Duration, usize) = if rest.starts_with("ms") {
            (chrono::Duration::milliseconds, 2)
        } else if rest.starts_with('h') {
            (chrono::Duration::hours, 1)
        } else if rest.starts_with('m') {
            (chrono::Duration::minutes, 1)
        } else if rest.starts_with('s') {
            (chrono::Duration::seconds, 1)
        } else {
            return Err(invalid());
        };
        rest = &rest[len..];

        total = total + to_duration(quantity);
    }

    Ok(if negative { -total } else { total })
}

/// Split a one-line task definition into `(schedule text, command text)`.
///
/// Three layouts are recognized:
/// - `@name command…`: one schedule token;
/// - `@every <dur> command…`: two schedule tokens;
/// - `m h dom mon dow command…`: five schedule tokens.
///
/// # Errors
///
/// `InvalidTask` when the line holds fewer than two whitespace tokens.
pub fn split_definition(line: &str) -> Result<(String, String)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(ParseError::InvalidTask(line.to_string()));
    }

    let schedule_tokens = if fields[0].starts_with("@every") {
        2
    } else if fields[0].starts_with('@') {
        1
    } else {
        5
    };
    if fields.len() < schedule_tokens {
        return Err(ParseError::InvalidTask(line.to_string()));
    }

    Ok((
        fields[..schedule_tokens].join(" "),
        fields[schedule_tokens..].join(" "),
    ))
}

/// Parse a one-line task definition straight into a [`Task`].
pub fn parse_task(line: &str) -> Result<Task> {
    let (schedule_text, command) = split_definition(line)?;
    Ok(Task {
        schedule: parse_schedule(&schedule_text)?,
        command,
    })
}
