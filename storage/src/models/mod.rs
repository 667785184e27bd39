//! Persistence models: users, polls, answers, reports.

mod answer;
mod poll;
mod report;
mod user;

pub use answer::{PollAnswer, ReturnTime, DRIVER_ALONE};
pub use poll::Poll;
pub use report::{PollReport, ReportKind};
pub use user::TelegramUser;
