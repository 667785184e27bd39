//! Storage crate: poll, answer, and report persistence for the carpooler bot.
//!
//! ## Modules
//!
//! - [`error`] – StorageError
//! - [`models`] – TelegramUser, Poll, PollAnswer, PollReport
//! - [`database`] – Database handle with schema bootstrap
//! - [`poll_repo`] – PollRepository (poll lifecycle)
//! - [`answer_repo`] – PollAnswerRepository (answer merge engine)
//! - [`report_repo`] – PollReportRepository (report registry)
//! - [`retry`] – uniform retry decorator for store operations
//! - [`sqlite_pool`] – SqlitePoolManager

mod answer_repo;
mod database;
mod error;
mod models;
mod poll_repo;
mod report_repo;
mod retry;
mod sqlite_pool;

#[cfg(test)]
mod report_repo_test;

pub use answer_repo::PollAnswerRepository;
pub use database::Database;
pub use error::{Result, StorageError};
pub use models::{
    Poll, PollAnswer, PollReport, ReportKind, ReturnTime, TelegramUser, DRIVER_ALONE,
};
pub use poll_repo::PollRepository;
pub use report_repo::PollReportRepository;
pub use sqlite_pool::SqlitePoolManager;
