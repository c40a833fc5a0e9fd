use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Top-level config (envcron.toml + ENVCRON_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvcronConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Task definitions: a schedule expression paired with a command line.
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

/// Dispatch runtime knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Cap on simultaneously running commands. Unset means unbounded
    /// fire-and-forget dispatch, which is the default behaviour.
    #[serde(default)]
    pub max_concurrent: Option<usize>,

    /// Shell binary that command lines are handed to via `-c`.
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: None,
            shell: default_shell(),
        }
    }
}

/// One `[[tasks]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Schedule expression: 5-field cron, `@name`, or `@every <duration>`.
    pub schedule: String,

    /// Command line handed to the shell when the schedule fires.
    pub command: String,
}

fn default_shell() -> String {
    "/bin/sh".to_string()
}

impl EnvcronConfig {
    /// Load config from a TOML file with ENVCRON_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.envcron/envcron.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: EnvcronConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("ENVCRON_").split("_"))
            .extract()
            .map_err(|e| crate::error::EnvcronError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.envcron/envcron.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_tasks_and_no_bound() {
        let config = EnvcronConfig::default();
        assert!(config.tasks.is_empty());
        assert!(config.scheduler.max_concurrent.is_none());
        assert_eq!(config.scheduler.shell, "/bin/sh");
    }

    #[test]
    fn toml_tasks_and_scheduler_knobs_parse() {
        let config: EnvcronConfig = Figment::new()
            .merge(Toml::string(
                r#"
                [scheduler]
                max_concurrent = 4
                shell = "/bin/bash"

                [[tasks]]
                schedule = "@every 1h"
                command = "echo hourly"

                [[tasks]]
                schedule = "*/5 * * * *"
                command = "echo five"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.scheduler.max_concurrent, Some(4));
        assert_eq!(config.scheduler.shell, "/bin/bash");
        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.tasks[0].schedule, "@every 1h");
        assert_eq!(config.tasks[1].command, "echo five");
    }
}
