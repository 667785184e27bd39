//! # Carpooler bot application
//!
//! A Telegram bot that runs a recurring weekly attendance poll, tracks
//! per-user answers (overrides, driver assignment, return time), and keeps
//! every outstanding report message up to date by editing it in place.
//!
//! Persistence lives in the `storage` crate, the transport seam in
//! `carpooler-core`; this crate wires them together with rendering,
//! reconciliation, scheduling, commands, and the teloxide adapter.

pub mod commands;
pub mod config;
pub mod holiday;
pub mod poll;
pub mod poll_report;
pub mod runner;
pub mod scheduling;
pub mod telegram;

pub use commands::Command;
pub use config::BotConfig;
pub use holiday::{HolidayCalendar, RegionalHolidays};
pub use runner::{run_bot, AppState};
pub use scheduling::JobScheduler;
pub use telegram::TelegramBotAdapter;
