use std::sync::Arc;

use envcron_exec::{CommandRunner, ShellRunner};
use envcron_runtime::Dispatcher;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envcron=info".into()),
        )
        .init();

    // load config: explicit path via ENVCRON_CONFIG > ~/.envcron/envcron.toml
    let config_path = std::env::var("ENVCRON_CONFIG").ok();
    let config =
        envcron_core::EnvcronConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
            warn!("Config load failed ({}), using defaults", e);
            envcron_core::EnvcronConfig::default()
        });

    let tasks = envcron_runtime::load_tasks(&collect_definitions(&config));
    if tasks.is_empty() {
        warn!("no valid tasks configured, running idle");
    }

    let runner: Arc<dyn CommandRunner> =
        Arc::new(ShellRunner::with_shell(config.scheduler.shell.clone()));
    let dispatcher = Dispatcher::new(tasks, runner, config.scheduler.max_concurrent);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let engine = tokio::spawn(dispatcher.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, stopping");
    let _ = shutdown_tx.send(true);
    let _ = engine.await;
    Ok(())
}

/// Gather raw `(schedule, command)` pairs from every task source.
///
/// Config `[[tasks]]` entries already come pre-split; `TASK_*` environment
/// variables carry single-line definitions (`"<schedule> <command>"`) and go
/// through `split_definition`. The dispatch runtime itself never reads
/// ambient process state.
fn collect_definitions(config: &envcron_core::EnvcronConfig) -> Vec<(String, String)> {
    let mut definitions: Vec<(String, String)> = config
        .tasks
        .iter()
        .map(|t| (t.schedule.clone(), t.command.clone()))
        .collect();

    for (key, value) in std::env::vars() {
        if key.starts_with("TASK_") {
            match envcron_cron::split_definition(&value) {
                Ok(pair) => definitions.push(pair),
                Err(e) => warn!(%key, error = %e, "invalid task definition"),
            }
        }
    }

    definitions
}
