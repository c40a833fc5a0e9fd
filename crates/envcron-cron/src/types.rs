//! Shared data types for envcron-cron.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

// ---------------------------------------------------------------------------
// FieldRange
// ---------------------------------------------------------------------------

/// Inclusive bounds for one positional cron field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
}

/// Minute field: 0–59.
pub const MINUTES: FieldRange = FieldRange { min: 0, max: 59 };
/// Hour field: 0–23.
pub const HOURS: FieldRange = FieldRange { min: 0, max: 23 };
/// Day-of-month field: 1–31.
pub const DAYS_OF_MONTH: FieldRange = FieldRange { min: 1, max: 31 };
/// Month field: 1–12.
pub const MONTHS: FieldRange = FieldRange { min: 1, max: 12 };
/// Day-of-week field: 0–6 with 0 = Sunday. `7` is accepted as a Sunday alias.
pub const DAYS_OF_WEEK: FieldRange = FieldRange { min: 0, max: 6 };

/// The literal day-of-week value accepted as an alias for Sunday.
pub const SUNDAY_ALIAS: u32 = 7;

// ---------------------------------------------------------------------------
// CalendarFields
// ---------------------------------------------------------------------------

/// The five parsed value sets of a calendar schedule.
///
/// Each set is produced once by the field parser and never mutated. A set
/// is non-empty for every expression the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    pub minutes: Vec<u32>,
    pub hours: Vec<u32>,
    pub days_of_month: Vec<u32>,
    pub months: Vec<u32>,
    pub days_of_week: Vec<u32>,
}

impl CalendarFields {
    /// Decide whether this schedule fires at instant `t`.
    ///
    /// All five components must match. Day-of-month and day-of-week combine
    /// with AND, not the OR some cron dialects apply when both fields are
    /// restricted. A set containing the literal `7` matches real Sundays;
    /// that is the only weekday alias.
    pub fn matches<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        let dow = t.weekday().num_days_from_sunday();
        self.minutes.contains(&t.minute())
            && self.hours.contains(&t.hour())
            && self.days_of_month.contains(&t.day())
            && self.months.contains(&t.month())
            && (self.days_of_week.contains(&dow)
                || (dow == 0 && self.days_of_week.contains(&SUNDAY_ALIAS)))
    }
}

// ---------------------------------------------------------------------------
// Schedule / Task
// ---------------------------------------------------------------------------

/// When a task should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Evaluated against wall-clock time on the shared per-minute tick.
    Calendar(CalendarFields),

    /// Repeats on its own fixed-interval timer (`@every` form).
    ///
    /// The interval is whatever the duration grammar produced; it is signed
    /// and not checked for positivity here; the runtime decides what to do
    /// with a non-positive value.
    Every { interval: chrono::Duration },
}

impl Schedule {
    /// `true` for the `@every` variant.
    pub fn is_every(&self) -> bool {
        matches!(self, Schedule::Every { .. })
    }
}

/// A schedule paired with the command line it triggers.
///
/// Created once at load time and only ever read by the dispatch runtime.
#[derive(Debug, Clone)]
pub struct Task {
    pub schedule: Schedule,
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fields(
        minutes: Vec<u32>,
        hours: Vec<u32>,
        days_of_month: Vec<u32>,
        months: Vec<u32>,
        days_of_week: Vec<u32>,
    ) -> CalendarFields {
        CalendarFields {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
        }
    }

    fn restricted() -> CalendarFields {
        // minute 0 or 30, hour 12, 1st of the month, January or July, Monday
        fields(vec![0, 30], vec![12], vec![1], vec![1, 7], vec![1])
    }

    #[test]
    fn matches_monday_january_first_noon() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert!(restricted().matches(&t));
    }

    #[test]
    fn matches_half_past_noon() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert!(restricted().matches(&t));
    }

    #[test]
    fn matches_july_first_noon() {
        let t = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert!(restricted().matches(&t));
    }

    #[test]
    fn rejects_wrong_day_of_month() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert!(!restricted().matches(&t));
    }

    #[test]
    fn rejects_wrong_month() {
        let t = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        assert!(!restricted().matches(&t));
    }

    #[test]
    fn rejects_wrong_minute() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 15, 0).unwrap();
        assert!(!restricted().matches(&t));
    }

    #[test]
    fn sunday_matches_weekday_zero() {
        // 2024-01-07 is a Sunday.
        let t = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        let f = fields(
            vec![0],
            vec![12],
            (1..=31).collect(),
            (1..=12).collect(),
            vec![0],
        );
        assert!(f.matches(&t));
    }

    #[test]
    fn sunday_matches_weekday_seven_alias() {
        let t = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        let f = fields(
            vec![0],
            vec![12],
            (1..=31).collect(),
            (1..=12).collect(),
            vec![SUNDAY_ALIAS],
        );
        assert!(f.matches(&t));
    }

    #[test]
    fn seven_alias_does_not_leak_to_other_weekdays() {
        // 2024-01-08 is a Monday; a {7} set must not match it.
        let t = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
        let f = fields(
            vec![0],
            vec![12],
            (1..=31).collect(),
            (1..=12).collect(),
            vec![SUNDAY_ALIAS],
        );
        assert!(!f.matches(&t));
    }

    #[test]
    fn day_of_month_and_day_of_week_are_anded() {
        // Both fields restricted. 2024-01-01 is a Monday (dow 1) and the 1st,
        // so both clauses hold. 2024-01-08 is also a Monday but the 8th,
        // a dialect that ORs the two day fields would still fire here; this
        // implementation intentionally does not.
        let f = fields(vec![0], vec![12], vec![1], (1..=12).collect(), vec![1]);
        let both = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let weekday_only = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
        assert!(f.matches(&both));
        assert!(!f.matches(&weekday_only));
    }

    #[test]
    fn schedule_is_every_flag() {
        let every = Schedule::Every {
            interval: chrono::Duration::hours(1),
        };
        let calendar = Schedule::Calendar(restricted());
        assert!(every.is_every());
        assert!(!calendar.is_every());
    }
}
