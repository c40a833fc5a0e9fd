//! Shell command execution behind the [`CommandRunner`] seam.

use async_trait::async_trait;
use tokio::process::Command as AsyncCommand;
use tracing::debug;

use crate::error::{ExecError, Result};

/// Captured outcome of one command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Process exit code (0 = success, -1 when terminated by a signal).
    pub exit_code: i32,

    /// Combined standard output and standard error.
    pub output: String,
}

/// The single seam between the dispatch runtime and process spawning.
///
/// Implementations must be cheap to share (`Arc<dyn CommandRunner>`) and
/// safe to invoke concurrently; the runtime fires executions without
/// waiting for earlier ones to finish.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute `command` to completion and capture its combined output.
    ///
    /// # Errors
    ///
    /// - `Spawn`: the child could not be started.
    /// - `Io`: waiting on or reading from the child failed.
    async fn run(&self, command: &str) -> Result<ExecResult>;
}

/// Default runner: hands the command line to `<shell> -c` and waits.
///
/// Blocking is confined to the invoking task; `tokio::process` keeps the
/// runtime free while the child runs.
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    /// Runner using `/bin/sh`.
    pub fn new() -> Self {
        Self::with_shell("/bin/sh")
    }

    /// Runner using an explicit shell binary (e.g. `/bin/bash`).
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<ExecResult> {
        debug!(shell = %self.shell, %command, "exec");

        let output = AsyncCommand::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|e| ExecError::Spawn(format!("{}: {e}", self.shell)))?;

        let exit_code = output.status.code().unwrap_or(-1);
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ExecResult {
            exit_code,
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let runner = ShellRunner::new();
        let result = runner.run("echo hello").await.unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("hello"));
    }

    #[tokio::test]
    async fn captures_stderr_in_combined_output() {
        let runner = ShellRunner::new();
        let result = runner.run("echo oops >&2").await.unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("oops"));
    }

    #[tokio::test]
    async fn non_zero_exit_is_not_an_error() {
        let runner = ShellRunner::new();
        let result = runner.run("exit 3").await.unwrap();
        assert_eq!(result.exit_code, 3);
    }

    #[tokio::test]
    async fn missing_shell_is_a_spawn_error() {
        let runner = ShellRunner::with_shell("/nonexistent/shell");
        let result = runner.run("echo hello").await;
        assert!(matches!(result, Err(ExecError::Spawn(_))));
    }
}
