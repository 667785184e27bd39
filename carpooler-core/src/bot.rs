//! Bot abstraction for the chat transport.
//!
//! [`Bot`] is transport-agnostic; the application crate provides the teloxide
//! implementation, tests substitute recording mocks.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{InlineKeyboard, SentMessage, SentPoll};

/// Abstraction over the chat transport. All text is HTML-formatted.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message, optionally with an inline keyboard.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<SentMessage>;

    /// Edits an already-sent message in place. Fails with a "message is not
    /// modified" API error when the content is identical; see
    /// [`crate::BotError::is_message_not_modified`].
    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()>;

    /// Sends a native non-anonymous multiple-answer poll.
    async fn send_poll(&self, chat_id: i64, question: &str, options: &[String])
        -> Result<SentPoll>;

    /// Stops an open native poll so it no longer accepts votes.
    async fn stop_poll(&self, chat_id: i64, message_id: i64) -> Result<()>;

    /// Pins a message in the chat.
    async fn pin_message(&self, chat_id: i64, message_id: i64) -> Result<()>;

    /// Unpins a message in the chat.
    async fn unpin_message(&self, chat_id: i64, message_id: i64) -> Result<()>;

    /// Answers a callback query. With `text`, shows a toast (or an alert when
    /// `show_alert`); without, just clears the client's loading state.
    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<()>;
}
