//! Weekly poll choreography.

use anyhow::Result;
use carpooler_core::Bot;
use storage::Database;
use tracing::info;

pub const WEEKLY_POLL_QUESTION: &str = "When are you going on site this week?";

pub fn weekday_options() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

/// Replaces the chat's weekly poll: stops and unpins the previous one (its
/// row is closed by `start_new_poll`), sends the new native poll, pins it,
/// and records it as the chat's open poll.
pub async fn send_weekly_poll(bot: &dyn Bot, db: &Database, chat_id: i64) -> Result<()> {
    if let Some(latest_poll) = db.polls().get_latest_poll(chat_id).await? {
        bot.stop_poll(chat_id, latest_poll.message_id).await?;
        bot.unpin_message(chat_id, latest_poll.message_id).await?;
    }

    let options = weekday_options();
    let sent = bot.send_poll(chat_id, WEEKLY_POLL_QUESTION, &options).await?;
    bot.pin_message(chat_id, sent.message_id).await?;

    db.polls()
        .start_new_poll(chat_id, sent.message_id, &sent.poll_id, &options)
        .await?;

    info!(chat_id, poll_id = %sent.poll_id, "Sent weekly poll");

    Ok(())
}
