//! Single cron field parsing.
//!
//! A field expands to the ordered set of integer values it accepts within
//! its [`FieldRange`]. Grammar branches are tried in a fixed priority
//! order: wildcard, step, range, list, single value.
//!
//! Validation is deliberately uneven across branches: only the single-value
//! branch performs a bounds check. Step, range, and list values are taken
//! verbatim, and a step of zero never terminates. Callers own those hazards.

use crate::error::{ParseError, Result};
use crate::types::{FieldRange, DAYS_OF_WEEK, SUNDAY_ALIAS};

/// Expand one textual cron field into its permitted values.
///
/// # Errors
///
/// - `InvalidInteger`: a token did not parse as an integer.
/// - `OutOfRange`: a single-value field lies outside `range` (the
///   day-of-week field additionally accepts the literal `7`).
pub fn parse_field(spec: &str, range: FieldRange) -> Result<Vec<u32>> {
    if spec == "*" {
        return Ok((range.min..=range.max).collect());
    }

    if let Some(step) = spec.strip_prefix("*/") {
        let step: u32 = parse_int(step)?;
        let mut values = Vec::new();
        let mut v = range.min;
        while v <= range.max {
            values.push(v);
            v += step;
        }
        return Ok(values);
    }

    if let Some((a, b)) = spec.split_once('-') {
        let lo: u32 = parse_int(a)?;
        let hi: u32 = parse_int(b)?;
        // lo > hi yields an empty set, not an error.
        return Ok((lo..=hi).collect());
    }

    if spec.contains(',') {
        // List values are accepted verbatim, without a bounds check.
        return spec.split(',').map(parse_int).collect();
    }

    let value: u32 = parse_int(spec)?;
    if value < range.min || value > range.max {
        // Stored as-is, not normalized to 0.
        if range == DAYS_OF_WEEK && value == SUNDAY_ALIAS {
            return Ok(vec![value]);
        }
        return Err(ParseError::OutOfRange {
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(vec![value])
}

fn parse_int(token: &str) -> Result<u32> {
    token.parse().map_err(|source| ParseError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}
