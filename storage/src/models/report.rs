//! Poll report model: a rendered, edit-tracked message.

use serde::{Deserialize, Serialize};

/// What a report message shows: the whole week, or a single day bound to one
/// poll option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    FullWeek,
    SingleDay { option_id: i64 },
}

/// One outstanding report message, identified by (chat_id, message_id).
/// `poll_option_id` NULL means full-week; the kind is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PollReport {
    pub poll_id: String,
    pub chat_id: i64,
    pub message_id: i64,
    pub poll_option_id: Option<i64>,
    pub sent_timestamp: i64,
}

impl PollReport {
    pub fn kind(&self) -> ReportKind {
        match self.poll_option_id {
            None => ReportKind::FullWeek,
            Some(option_id) => ReportKind::SingleDay { option_id },
        }
    }
}
