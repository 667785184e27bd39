//! Transport error types.
//!
//! [`BotError`] wraps failures surfaced by the chat transport. The one case
//! callers inspect is the "message is not modified" bad request, which edit
//! loops treat as success.

use thiserror::Error;

/// Errors returned by [`crate::Bot`] implementations.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(i64),
}

impl BotError {
    /// True when the transport rejected an edit because the new content is
    /// identical to the current one. Reconciliation treats this as success.
    pub fn is_message_not_modified(&self) -> bool {
        match self {
            Self::Api(message) => {
                message.contains("message is not modified") || message.contains("exactly the same")
            }
            Self::InvalidMessageId(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_modified_detection() {
        let err = BotError::Api(
            "Bad Request: message is not modified: specified new message content and reply \
             markup are exactly the same as a current content and reply markup of the message"
                .to_string(),
        );
        assert!(err.is_message_not_modified());
    }

    #[test]
    fn test_other_api_errors_are_not_not_modified() {
        assert!(!BotError::Api("Bad Request: message to edit not found".to_string())
            .is_message_not_modified());
        assert!(!BotError::InvalidMessageId(-1).is_message_not_modified());
    }
}
