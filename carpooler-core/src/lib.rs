//! # carpooler-core
//!
//! Core types and traits for the carpooler bot: the [`Bot`] transport trait,
//! transport value types, [`BotError`], and tracing initialization.
//! Transport-agnostic; the teloxide implementation lives in carpooler-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{InlineButton, InlineKeyboard, SentMessage, SentPoll};
