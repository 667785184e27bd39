//! Telegram user model.
//!
//! Denormalized fullname cache; refreshed on every vote.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TelegramUser {
    pub user_id: i64,
    pub user_fullname: String,
}

impl TelegramUser {
    pub fn new(user_id: i64, user_fullname: impl Into<String>) -> Self {
        Self {
            user_id,
            user_fullname: user_fullname.into(),
        }
    }
}
