//! Transport value types: sent-message handles and inline keyboards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handle to a message the transport just sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub date: DateTime<Utc>,
}

/// Handle to a native poll the transport just sent. `poll_id` is the
/// transport's opaque poll identifier; `message_id` is the carrying message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentPoll {
    pub poll_id: String,
    pub chat_id: i64,
    pub message_id: i64,
}

/// One pressable control attached to a message. `callback_data` comes back
/// verbatim in the callback query when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Rows of inline buttons rendered under a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }
}
