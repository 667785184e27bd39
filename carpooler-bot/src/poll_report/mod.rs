//! Poll reports: rendering, reconciliation, and interaction handling.
//!
//! A report is a message reflecting live poll state, either the full week or
//! a single day. Reports are edited in place whenever the underlying answers
//! change; single-day reports carry the interactive keyboard.

mod handlers;
mod reconciler;
mod renderer;
mod types;


pub use handlers::handle_report_interaction;
pub use reconciler::{
    send_daily_report, send_full_report, update_all_reports, update_report,
};
pub use renderer::{format_user_answer, full_poll_result, sorted_positive_answers, whos_on_text};
pub use types::{default_keyboard, ReportCommand, DAILY_MSG_HELP};
