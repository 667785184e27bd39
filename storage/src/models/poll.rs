//! Weekly poll model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// One weekly poll bound to a chat. `options` is the ordered option list
/// (weekday names in current use); `message_id` is the poll control message
/// and doubles as the recency ordering key.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Poll {
    pub poll_id: String,
    pub chat_id: i64,
    pub message_id: i64,
    pub options: Json<Vec<String>>,
    pub is_open: bool,
}
