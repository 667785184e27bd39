//! Recording mock of the core Bot trait for integration tests.
//!
//! Records every send/edit/callback call so tests can assert on edit batches
//! and callback answers without hitting Telegram.

// Each integration test crate uses its own subset of the recorders.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use carpooler_bot::holiday::HolidayCalendar;
use carpooler_core::{Bot, BotError, InlineKeyboard, Result, SentMessage, SentPoll};
use chrono::{NaiveDate, Utc};

/// Holiday calendar that never has holidays; keeps renderer output
/// deterministic in tests.
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn holiday_name(&self, _date: NaiveDate) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
    pub has_keyboard: bool,
}

#[derive(Debug, Clone)]
pub struct EditRecord {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
    pub has_keyboard: bool,
}

#[derive(Debug, Clone)]
pub struct CallbackRecord {
    pub callback_id: String,
    pub text: Option<String>,
    pub show_alert: bool,
}

#[derive(Default)]
pub struct RecordingBot {
    next_message_id: AtomicI64,
    pub sent: Mutex<Vec<SentRecord>>,
    pub edits: Mutex<Vec<EditRecord>>,
    pub callbacks: Mutex<Vec<CallbackRecord>>,
    /// Poll/pin lifecycle calls as "name:chat_id:message_id" strings.
    pub events: Mutex<Vec<String>>,
    /// When set, every edit fails the way Telegram rejects a no-op edit.
    pub edits_not_modified: AtomicBool,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn edit_count(&self) -> usize {
        self.edits.lock().expect("edits lock").len()
    }

    pub fn last_callback(&self) -> CallbackRecord {
        self.callbacks
            .lock()
            .expect("callbacks lock")
            .last()
            .expect("no callback recorded")
            .clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<SentMessage> {
        let message_id = self.next_id();
        self.sent.lock().expect("sent lock").push(SentRecord {
            chat_id,
            message_id,
            text: text.to_string(),
            has_keyboard: keyboard.is_some(),
        });
        Ok(SentMessage {
            chat_id,
            message_id,
            date: Utc::now(),
        })
    }

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        self.edits.lock().expect("edits lock").push(EditRecord {
            chat_id,
            message_id,
            text: text.to_string(),
            has_keyboard: keyboard.is_some(),
        });

        if self.edits_not_modified.load(Ordering::SeqCst) {
            return Err(BotError::Api(
                "Bad Request: message is not modified: specified new message content and reply \
                 markup are exactly the same as a current content and reply markup of the message"
                    .to_string(),
            ));
        }

        Ok(())
    }

    async fn send_poll(
        &self,
        chat_id: i64,
        _question: &str,
        _options: &[String],
    ) -> Result<SentPoll> {
        let message_id = self.next_id();
        self.events
            .lock()
            .expect("events lock")
            .push(format!("send_poll:{chat_id}:{message_id}"));
        Ok(SentPoll {
            poll_id: format!("mock-poll-{message_id}"),
            chat_id,
            message_id,
        })
    }

    async fn stop_poll(&self, chat_id: i64, message_id: i64) -> Result<()> {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("stop_poll:{chat_id}:{message_id}"));
        Ok(())
    }

    async fn pin_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("pin_message:{chat_id}:{message_id}"));
        Ok(())
    }

    async fn unpin_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("unpin_message:{chat_id}:{message_id}"));
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<()> {
        self.callbacks
            .lock()
            .expect("callbacks lock")
            .push(CallbackRecord {
                callback_id: callback_id.to_string(),
                text: text.map(|t| t.to_string()),
                show_alert,
            });
        Ok(())
    }
}
