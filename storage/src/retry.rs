//! Retry decorator for database operations.
//!
//! Applied uniformly at the repository boundary: every store operation is
//! wrapped in [`with_retry`], which retries transient connectivity-class
//! failures with exponential backoff and fails everything else immediately.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

const MAX_RETRIES: u32 = 3;
const INITIAL_DELAY: Duration = Duration::from_millis(500);
const BACKOFF_FACTOR: u32 = 2;

/// True for connectivity-class failures worth retrying. Constraint
/// violations, decode errors, and row-not-found are not transient.
pub(crate) fn is_transient(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => true,
        sqlx::Error::Database(db) => db.message().contains("database is locked"),
        _ => false,
    }
}

/// Runs `operation`, retrying transient database errors with exponential
/// backoff (bounded attempts). The last error is surfaced when all attempts
/// fail.
pub(crate) async fn with_retry<T, F, Fut>(
    description: &str,
    mut operation: F,
) -> Result<T, sqlx::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut delay = INITIAL_DELAY;

    for attempt in 1..=MAX_RETRIES {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if is_transient(&e) => {
                warn!(
                    operation = description,
                    attempt,
                    max_attempts = MAX_RETRIES + 1,
                    error = %e,
                    "Database operation failed, retrying in {:.2}s",
                    delay.as_secs_f64(),
                );
                tokio::time::sleep(delay).await;
                delay *= BACKOFF_FACTOR;
            }
            Err(e) => return Err(e),
        }
    }

    operation().await.map_err(|e| {
        error!(
            operation = description,
            attempts = MAX_RETRIES + 1,
            error = %e,
            "Database operation failed after all retries",
        );
        e
    })
}
