//! Named cron jobs, one set per chat.
//!
//! A job loops forever: compute the next cron occurrence, sleep, run the
//! task. A failing run is logged and the schedule proceeds to the next
//! occurrence; nothing a task does can take the schedule down.

use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Local;
use cron::Schedule;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Default)]
pub struct JobScheduler {
    jobs: Mutex<HashMap<String, Vec<JoinHandle<()>>>>,
}

impl JobScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any job is registered under `name`.
    pub async fn jobs_exist(&self, name: &str) -> bool {
        self.jobs.lock().await.contains_key(name)
    }

    /// Cancels every job registered under `name`. Returns whether any job
    /// was removed.
    pub async fn remove_jobs(&self, name: &str) -> bool {
        match self.jobs.lock().await.remove(name) {
            Some(handles) => {
                for handle in handles {
                    handle.abort();
                }
                info!(job = name, "Removed scheduled jobs");
                true
            }
            None => false,
        }
    }

    /// Registers a job under `name` firing per the cron `expression`
    /// (seconds-resolution cron syntax, local time).
    pub async fn add_cron_job<F, Fut>(&self, name: &str, expression: &str, task: F) -> Result<()>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send,
    {
        let schedule = Schedule::from_str(expression)
            .with_context(|| format!("invalid cron expression '{expression}'"))?;

        let job_name = name.to_string();
        let handle = tokio::spawn(async move {
            loop {
                let Some(next) = schedule.upcoming(Local).next() else {
                    info!(job = %job_name, "Cron schedule has no future occurrence, stopping job");
                    break;
                };
                let delay = (next - Local::now()).to_std().unwrap_or_default();
                tokio::time::sleep(delay).await;

                if let Err(e) = task().await {
                    error!(
                        job = %job_name,
                        error = %e,
                        "Scheduled task failed. Will retry on next scheduled run."
                    );
                }
            }
        });

        self.jobs
            .lock()
            .await
            .entry(name.to_string())
            .or_default()
            .push(handle);

        info!(job = name, cron = expression, "Registered scheduled job");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_jobs_exist_and_remove() {
        let scheduler = JobScheduler::new();

        assert!(!scheduler.jobs_exist("42").await);

        scheduler
            .add_cron_job("42", "0 0 8 * * Sun", || async { Ok(()) })
            .await
            .expect("Failed to add job");

        assert!(scheduler.jobs_exist("42").await);
        assert!(scheduler.remove_jobs("42").await);
        assert!(!scheduler.jobs_exist("42").await);
        assert!(!scheduler.remove_jobs("42").await);
    }

    #[tokio::test]
    async fn test_invalid_cron_expression() {
        let scheduler = JobScheduler::new();

        let result = scheduler
            .add_cron_job("42", "not a cron expression", || async { Ok(()) })
            .await;

        assert!(result.is_err());
        assert!(!scheduler.jobs_exist("42").await);
    }

    #[tokio::test]
    async fn test_job_runs_and_survives_task_errors() {
        let scheduler = JobScheduler::new();
        let runs = Arc::new(AtomicU32::new(0));

        let counter = runs.clone();
        scheduler
            .add_cron_job("42", "* * * * * *", move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    // Every run fails; the schedule must keep firing anyway.
                    Err(anyhow::anyhow!("boom"))
                }
            })
            .await
            .expect("Failed to add job");

        tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
        scheduler.remove_jobs("42").await;

        assert!(runs.load(Ordering::SeqCst) >= 1);
    }
}
