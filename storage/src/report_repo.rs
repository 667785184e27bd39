//! Poll report repository: registry of outstanding report messages.
//!
//! Reports are identified by (chat_id, message_id) and never deleted; the
//! rendering kind is fixed at insert via the nullability of `poll_option_id`.

use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::PollReport;
use crate::retry::with_retry;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct PollReportRepository {
    pool_manager: SqlitePoolManager,
}

impl PollReportRepository {
    pub(crate) fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Registers a freshly sent report message. `poll_option_id` None means
    /// full-week, Some(option) a single-day report for that option.
    pub async fn insert_report(
        &self,
        poll_id: &str,
        chat_id: i64,
        message_id: i64,
        poll_option_id: Option<i64>,
        sent_timestamp: i64,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();

        with_retry("insert_report", || async move {
            sqlx::query(
                "INSERT INTO poll_reports (poll_id, chat_id, message_id, poll_option_id, sent_timestamp)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(poll_id)
            .bind(chat_id)
            .bind(message_id)
            .bind(poll_option_id)
            .bind(sent_timestamp)
            .execute(pool)
            .await
        })
        .await?;

        info!(poll_id, chat_id, message_id, "Registered poll report");

        Ok(())
    }

    /// All outstanding reports for a poll.
    pub async fn get_all_reports(&self, poll_id: &str) -> Result<Vec<PollReport>> {
        let pool = self.pool_manager.pool();

        let reports = with_retry("get_all_reports", || async move {
            sqlx::query_as::<_, PollReport>("SELECT * FROM poll_reports WHERE poll_id = ?")
                .bind(poll_id)
                .fetch_all(pool)
                .await
        })
        .await?;

        Ok(reports)
    }

    /// Looks up a report by its message identity. Reports predating a data
    /// reset are simply absent; that is surfaced as
    /// [`StorageError::ReportNotFound`], not a fault.
    pub async fn get_report(&self, chat_id: i64, message_id: i64) -> Result<PollReport> {
        let pool = self.pool_manager.pool();

        with_retry("get_report", || async move {
            sqlx::query_as::<_, PollReport>(
                "SELECT * FROM poll_reports WHERE chat_id = ? AND message_id = ?",
            )
            .bind(chat_id)
            .bind(message_id)
            .fetch_optional(pool)
            .await
        })
        .await?
        .ok_or(StorageError::ReportNotFound {
            chat_id,
            message_id,
        })
    }
}
