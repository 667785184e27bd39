//! Wraps teloxide::Bot and implements [`carpooler_core::Bot`]. Production
//! code talks to Telegram; tests substitute a recording Bot impl.

use async_trait::async_trait;
use carpooler_core::{Bot as CoreBot, BotError, InlineKeyboard, Result, SentMessage, SentPoll};
use teloxide::payloads::{
    AnswerCallbackQuerySetters, EditMessageTextSetters, SendMessageSetters, SendPollSetters,
    UnpinChatMessageSetters,
};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};

/// Thin wrapper around teloxide::Bot implementing the core Bot trait.
/// All outgoing text is sent with HTML parse mode.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    fn markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.callback_data.clone()))
                .collect::<Vec<_>>()
        }))
    }

    fn message_id(message_id: i64) -> Result<MessageId> {
        i32::try_from(message_id)
            .map(MessageId)
            .map_err(|_| BotError::InvalidMessageId(message_id))
    }
}

fn api_error(e: teloxide::RequestError) -> BotError {
    BotError::Api(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<SentMessage> {
        let mut request = self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(Self::markup(keyboard));
        }

        let sent = request.await.map_err(api_error)?;

        Ok(SentMessage {
            chat_id,
            message_id: i64::from(sent.id.0),
            date: sent.date,
        })
    }

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        let id = Self::message_id(message_id)?;

        let mut request = self
            .bot
            .edit_message_text(ChatId(chat_id), id, text)
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(Self::markup(keyboard));
        }

        request.await.map_err(api_error)?;
        Ok(())
    }

    async fn send_poll(
        &self,
        chat_id: i64,
        question: &str,
        options: &[String],
    ) -> Result<SentPoll> {
        let sent = self
            .bot
            .send_poll(ChatId(chat_id), question, options.to_vec())
            .is_anonymous(false)
            .allows_multiple_answers(true)
            .await
            .map_err(api_error)?;

        let poll_id = sent
            .poll()
            .map(|p| p.id.clone())
            .ok_or_else(|| BotError::Api("send_poll response carried no poll".to_string()))?;

        Ok(SentPoll {
            poll_id,
            chat_id,
            message_id: i64::from(sent.id.0),
        })
    }

    async fn stop_poll(&self, chat_id: i64, message_id: i64) -> Result<()> {
        let id = Self::message_id(message_id)?;
        self.bot
            .stop_poll(ChatId(chat_id), id)
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn pin_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        let id = Self::message_id(message_id)?;
        self.bot
            .pin_chat_message(ChatId(chat_id), id)
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn unpin_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        let id = Self::message_id(message_id)?;
        self.bot
            .unpin_chat_message(ChatId(chat_id))
            .message_id(id)
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<()> {
        let mut request = self.bot.answer_callback_query(callback_id);
        if let Some(text) = text {
            request = request.text(text);
        }
        if show_alert {
            request = request.show_alert(true);
        }

        request.await.map_err(api_error)?;
        Ok(())
    }
}
