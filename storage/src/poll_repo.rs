//! Poll repository: weekly poll lifecycle.
//!
//! At most one open poll exists per chat; `start_new_poll` closes the
//! previous open poll and inserts the new one in a single transaction.

use sqlx::types::Json;
use tracing::info;

use crate::error::Result;
use crate::models::Poll;
use crate::retry::with_retry;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct PollRepository {
    pool_manager: SqlitePoolManager,
}

impl PollRepository {
    pub(crate) fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Closes the chat's open poll (if any) and creates the new one as open.
    /// Both steps run in one transaction so the one-open-poll-per-chat
    /// invariant holds at every point.
    pub async fn start_new_poll(
        &self,
        chat_id: i64,
        message_id: i64,
        poll_id: &str,
        options: &[String],
    ) -> Result<Poll> {
        let pool = self.pool_manager.pool();

        with_retry("start_new_poll", || async move {
            let mut tx = pool.begin().await?;

            sqlx::query("UPDATE polls SET is_open = 0 WHERE chat_id = ? AND is_open = 1")
                .bind(chat_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                "INSERT INTO polls (poll_id, chat_id, message_id, options, is_open)
                 VALUES (?, ?, ?, ?, 1)",
            )
            .bind(poll_id)
            .bind(chat_id)
            .bind(message_id)
            .bind(Json(options.to_vec()))
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok(())
        })
        .await?;

        info!(chat_id, message_id, poll_id, "Started new poll");

        Ok(Poll {
            poll_id: poll_id.to_string(),
            chat_id,
            message_id,
            options: Json(options.to_vec()),
            is_open: true,
        })
    }

    /// Returns the chat's most recent poll, open or closed. Message ids grow
    /// with creation order, so newest-by-message-id is newest poll.
    pub async fn get_latest_poll(&self, chat_id: i64) -> Result<Option<Poll>> {
        let pool = self.pool_manager.pool();

        let poll = with_retry("get_latest_poll", || async move {
            sqlx::query_as::<_, Poll>(
                "SELECT * FROM polls WHERE chat_id = ? ORDER BY message_id DESC LIMIT 1",
            )
            .bind(chat_id)
            .fetch_optional(pool)
            .await
        })
        .await?;

        Ok(poll)
    }

    pub async fn get_poll(&self, poll_id: &str) -> Result<Option<Poll>> {
        let pool = self.pool_manager.pool();

        let poll = with_retry("get_poll", || async move {
            sqlx::query_as::<_, Poll>("SELECT * FROM polls WHERE poll_id = ?")
                .bind(poll_id)
                .fetch_optional(pool)
                .await
        })
        .await?;

        Ok(poll)
    }
}
