//! Weekly poll: sending choreography and vote-event handling.

mod actions;
mod handlers;

pub use actions::{send_weekly_poll, weekday_options, WEEKLY_POLL_QUESTION};
pub use handlers::handle_poll_answer;
