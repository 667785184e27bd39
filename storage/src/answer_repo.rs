//! Poll answer repository: the answer merge engine.
//!
//! A vote rewrites the raw answer of every option for that user in one
//! transaction, while per-option annotations (override, driver, return time)
//! survive any later re-vote. Annotation setters require an existing answer
//! row and surface [`StorageError::NotVoted`] otherwise.

use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::{Poll, PollAnswer, ReturnTime, TelegramUser};
use crate::retry::with_retry;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct PollAnswerRepository {
    pool_manager: SqlitePoolManager,
}

impl PollAnswerRepository {
    pub(crate) fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Stores a raw vote: one answer row per poll option, `poll_answer` true
    /// for the selected option indices and false for the rest. An empty
    /// selection is a retraction, i.e. a vote of false on every option.
    ///
    /// Existing rows are updated in place so overrides, driver assignments
    /// and return times set earlier are preserved. The user row is upserted
    /// with a refreshed fullname.
    pub async fn submit_vote(
        &self,
        poll_id: &str,
        selected_option_ids: &[i64],
        user: &TelegramUser,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();

        let poll = with_retry("get_poll_for_vote", || async move {
            sqlx::query_as::<_, Poll>("SELECT * FROM polls WHERE poll_id = ?")
                .bind(poll_id)
                .fetch_optional(pool)
                .await
        })
        .await?
        .ok_or_else(|| StorageError::PollNotFound {
            poll_id: poll_id.to_string(),
        })?;

        let option_count = poll.options.len() as i64;

        with_retry("submit_vote", || async move {
            let mut tx = pool.begin().await?;

            sqlx::query(
                "INSERT INTO telegram_users (user_id, user_fullname) VALUES (?, ?)
                 ON CONFLICT(user_id) DO UPDATE SET user_fullname = excluded.user_fullname",
            )
            .bind(user.user_id)
            .bind(&user.user_fullname)
            .execute(&mut *tx)
            .await?;

            for option_id in 0..option_count {
                sqlx::query(
                    "INSERT INTO poll_answers (user_id, poll_id, poll_option_id, poll_answer)
                     VALUES (?, ?, ?, ?)
                     ON CONFLICT(user_id, poll_id, poll_option_id)
                     DO UPDATE SET poll_answer = excluded.poll_answer",
                )
                .bind(user.user_id)
                .bind(poll_id)
                .bind(option_id)
                .bind(selected_option_ids.contains(&option_id))
                .execute(&mut *tx)
                .await?;
            }

            tx.commit().await?;
            Ok(())
        })
        .await?;

        info!(
            user_id = user.user_id,
            poll_id,
            selected = selected_option_ids.len(),
            "Stored vote"
        );

        Ok(())
    }

    /// Sets the explicit confirm/reject that supersedes the raw vote when
    /// rendering. The user must have voted on the option first.
    pub async fn set_override_answer(
        &self,
        user_id: i64,
        poll_id: &str,
        option_id: i64,
        value: bool,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();

        let result = with_retry("set_override_answer", || async move {
            sqlx::query(
                "UPDATE poll_answers SET override_answer = ?
                 WHERE user_id = ? AND poll_id = ? AND poll_option_id = ?",
            )
            .bind(value)
            .bind(user_id)
            .bind(poll_id)
            .bind(option_id)
            .execute(pool)
            .await
        })
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotVoted {
                user_id,
                poll_id: poll_id.to_string(),
                option_id,
            });
        }

        Ok(())
    }

    /// Sets the return time preference. The user must have voted on the
    /// option first.
    pub async fn set_return_time(
        &self,
        user_id: i64,
        poll_id: &str,
        option_id: i64,
        return_time: ReturnTime,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();

        let result = with_retry("set_return_time", || async move {
            sqlx::query(
                "UPDATE poll_answers SET return_time = ?
                 WHERE user_id = ? AND poll_id = ? AND poll_option_id = ?",
            )
            .bind(return_time.as_db())
            .bind(user_id)
            .bind(poll_id)
            .bind(option_id)
            .execute(pool)
            .await
        })
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotVoted {
                user_id,
                poll_id: poll_id.to_string(),
                option_id,
            });
        }

        Ok(())
    }

    /// Assigns a driver id to the user's answer. With `toggle`, assigning the
    /// value already stored clears it instead, so one control acts as both
    /// set and unset. The user must have voted on the option first.
    pub async fn set_driver_id(
        &self,
        user_id: i64,
        poll_id: &str,
        option_id: i64,
        driver_id: i64,
        toggle: bool,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();

        with_retry("set_driver_id", || async move {
            let mut tx = pool.begin().await?;

            let current: Option<(Option<i64>,)> = sqlx::query_as(
                "SELECT driver_id FROM poll_answers
                 WHERE user_id = ? AND poll_id = ? AND poll_option_id = ?",
            )
            .bind(user_id)
            .bind(poll_id)
            .bind(option_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((current,)) = current else {
                return Ok(false);
            };

            let new_value = if toggle && current == Some(driver_id) {
                None
            } else {
                Some(driver_id)
            };

            sqlx::query(
                "UPDATE poll_answers SET driver_id = ?
                 WHERE user_id = ? AND poll_id = ? AND poll_option_id = ?",
            )
            .bind(new_value)
            .bind(user_id)
            .bind(poll_id)
            .bind(option_id)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok(true)
        })
        .await?
        .then_some(())
        .ok_or_else(|| StorageError::NotVoted {
            user_id,
            poll_id: poll_id.to_string(),
            option_id,
        })
    }

    /// All answer rows for a poll, joined with each user's fullname.
    pub async fn get_all_answers(&self, poll_id: &str) -> Result<Vec<PollAnswer>> {
        let pool = self.pool_manager.pool();

        let answers = with_retry("get_all_answers", || async move {
            sqlx::query_as::<_, PollAnswer>(
                "SELECT a.user_id, a.poll_id, a.poll_option_id, a.poll_answer,
                        a.override_answer, a.driver_id, a.return_time, u.user_fullname
                 FROM poll_answers a
                 JOIN telegram_users u ON u.user_id = a.user_id
                 WHERE a.poll_id = ?
                 ORDER BY a.poll_option_id, a.user_id",
            )
            .bind(poll_id)
            .fetch_all(pool)
            .await
        })
        .await?;

        Ok(answers)
    }
}
