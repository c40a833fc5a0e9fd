//! The dispatch loop: timers in, detached command executions out.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use envcron_cron::{Schedule, Task};
use envcron_exec::CommandRunner;
use tokio::sync::{watch, Semaphore};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info, warn};

/// Cadence of the shared calendar ticker.
const CALENDAR_TICK: Duration = Duration::from_secs(60);

/// Drives all task timers until the shutdown channel says stop.
///
/// The task list is read-only after construction, so timers share it
/// without locking. Commands run through the injected [`CommandRunner`],
/// which is the only seam tests need to substitute.
pub struct Dispatcher {
    tasks: Arc<Vec<Task>>,
    runner: Arc<dyn CommandRunner>,
    limit: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    /// Build a dispatcher over `tasks`.
    ///
    /// `max_concurrent` caps simultaneously running commands when set; the
    /// default (`None`) preserves unbounded fire-and-forget dispatch.
    pub fn new(
        tasks: Vec<Task>,
        runner: Arc<dyn CommandRunner>,
        max_concurrent: Option<usize>,
    ) -> Self {
        Self {
            tasks: Arc::new(tasks),
            runner,
            limit: max_concurrent.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    /// Main loop. Arms one ticker per `@every` task, then drives the shared
    /// calendar ticker until `shutdown` broadcasts `true` (or its sender is
    /// dropped). Every armed timer selects on the same channel, so tearing
    /// the runtime down releases them all.
    pub async fn run(self, shutdown: watch::Receiver<bool>) {
        info!(tasks = self.tasks.len(), "dispatcher started");

        for task in self.tasks.iter() {
            if let Schedule::Every { interval } = &task.schedule {
                // The parser lets zero and negative intervals through; a
                // tokio timer cannot be armed from one, so the task is
                // disabled here rather than taking the process down.
                let period = match interval.to_std() {
                    Ok(p) if p > Duration::ZERO => p,
                    _ => {
                        error!(
                            command = %task.command,
                            interval = %interval,
                            "non-positive @every interval, task disabled"
                        );
                        continue;
                    }
                };
                spawn_interval_timer(
                    period,
                    task.command.clone(),
                    Arc::clone(&self.runner),
                    self.limit.clone(),
                    shutdown.clone(),
                );
            }
        }

        let mut ticker = time::interval_at(Instant::now() + CALENDAR_TICK, CALENDAR_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut shutdown = shutdown;
        loop {
            tokio::select! {
                _ = ticker.tick() => self.calendar_tick(),
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("dispatcher shutting down");
                        break;
                    }
                }
            }
        }
    }

    /// One firing of the shared calendar ticker: evaluate every calendar
    /// task against the current wall-clock instant and dispatch matches.
    fn calendar_tick(&self) {
        let now = Local::now();
        for task in self.tasks.iter() {
            if let Schedule::Calendar(fields) = &task.schedule {
                if fields.matches(&now) {
                    dispatch(
                        Arc::clone(&self.runner),
                        self.limit.clone(),
                        task.command.clone(),
                    );
                }
            }
        }
    }
}

/// Detached ticker for one `@every` task. First firing comes after one full
/// period; missed ticks are skipped, not bursted.
fn spawn_interval_timer(
    period: Duration,
    command: String,
    runner: Arc<dyn CommandRunner>,
    limit: Option<Arc<Semaphore>>,
    mut shutdown: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    dispatch(Arc::clone(&runner), limit.clone(), command.clone());
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    });
}

/// Launch one command execution as its own task and move on.
///
/// The firing loop never waits on this: no handle is kept, failures are
/// logged and discarded, and the next firing can overlap a still-running
/// execution. When a concurrency limit is configured the unit waits for a
/// permit before spawning the child.
fn dispatch(runner: Arc<dyn CommandRunner>, limit: Option<Arc<Semaphore>>, command: String) {
    tokio::spawn(async move {
        let _permit = match limit {
            Some(sem) => match sem.acquire_owned().await {
                Ok(permit) => Some(permit),
                // Closed semaphore means the runtime is gone.
                Err(_) => return,
            },
            None => None,
        };

        info!(%command, "running command");
        match runner.run(&command).await {
            Ok(result) => {
                if result.exit_code != 0 {
                    warn!(%command, exit_code = result.exit_code, "command exited non-zero");
                }
                if !result.output.is_empty() {
                    info!(%command, output = %result.output.trim_end(), "command output");
                }
            }
            Err(e) => error!(%command, error = %e, "command execution failed"),
        }
    });
}
