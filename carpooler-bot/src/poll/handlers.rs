//! Vote-event handling: merge the vote, then reconcile every report.

use anyhow::Result;
use carpooler_core::Bot;
use storage::{Database, StorageError, TelegramUser};
use tracing::info;

use crate::holiday::HolidayCalendar;
use crate::poll_report::update_all_reports;

/// Applies a raw vote event. An empty selection is a retraction, stored as a
/// negative vote on every option. Votes for polls we do not know (e.g. from
/// before a data reset) are ignored.
pub async fn handle_poll_answer(
    bot: &dyn Bot,
    db: &Database,
    holidays: &dyn HolidayCalendar,
    poll_id: &str,
    user: &TelegramUser,
    selected_option_ids: &[i64],
) -> Result<()> {
    if selected_option_ids.is_empty() {
        info!(user_id = user.user_id, poll_id, "User retracted their vote");
    }

    match db.answers().submit_vote(poll_id, selected_option_ids, user).await {
        Ok(()) => {}
        Err(StorageError::PollNotFound { .. }) => {
            info!(poll_id, "Vote for unknown poll ignored");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    update_all_reports(bot, db, holidays, poll_id).await
}
