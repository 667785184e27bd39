//! Storage error types.
//!
//! [`StorageError::Database`] is the only retried class (and only when the
//! underlying failure is transient, see [`crate::retry`]); the other variants
//! are expected control flow surfaced to the user.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Poll {poll_id} not found")]
    PollNotFound { poll_id: String },

    #[error("No report found for chat_id {chat_id} and message_id {message_id}")]
    ReportNotFound { chat_id: i64, message_id: i64 },

    #[error("User {user_id} has not voted in poll {poll_id} for option {option_id}")]
    NotVoted {
        user_id: i64,
        poll_id: String,
        option_id: i64,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
