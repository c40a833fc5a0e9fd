//! Task loading from raw `(schedule, command)` definitions.
//!
//! The runtime never scans process state itself; callers hand it whatever
//! raw pairs the host environment produced (config entries, environment
//! variables, …). A malformed entry is dropped with a warning and loading
//! continues; a bad schedule is never fatal.

use envcron_cron::{parse_schedule, Task};
use tracing::{info, warn};

/// Parse raw definitions into [`Task`]s, dropping unparsable entries.
pub fn load_tasks(definitions: &[(String, String)]) -> Vec<Task> {
    let mut tasks = Vec::new();
    for (schedule_text, command) in definitions {
        match parse_schedule(schedule_text) {
            Ok(schedule) => {
                info!(schedule = %schedule_text, %command, "task scheduled");
                tasks.push(Task {
                    schedule,
                    command: command.clone(),
                });
            }
            Err(e) => {
                warn!(schedule = %schedule_text, error = %e, "skipping unparsable task");
            }
        }
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(schedule: &str, command: &str) -> (String, String) {
        (schedule.to_string(), command.to_string())
    }

    #[test]
    fn loads_all_three_expression_forms() {
        let tasks = load_tasks(&[
            pair("* * * * *", "echo test1"),
            pair("@daily", "echo test2"),
            pair("@every 5m", "echo test3"),
        ]);
        assert_eq!(tasks.len(), 3);
        assert!(!tasks[0].schedule.is_every());
        assert!(!tasks[1].schedule.is_every());
        assert!(tasks[2].schedule.is_every());
    }

    #[test]
    fn unparsable_entry_yields_no_task() {
        let tasks = load_tasks(&[pair("invalid", "echo hello")]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn bad_entry_does_not_abort_the_rest() {
        let tasks = load_tasks(&[
            pair("@nonsense", "echo dropped"),
            pair("@hourly", "echo kept"),
        ]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].command, "echo kept");
    }
}
