//! Interaction handling for the daily report keyboard.

use anyhow::Result;
use carpooler_core::Bot;
use storage::{Database, ReportKind, ReturnTime, StorageError, DRIVER_ALONE};
use tracing::info;

use crate::holiday::HolidayCalendar;
use crate::poll_report::reconciler::update_report;
use crate::poll_report::types::{ReportCommand, DAILY_MSG_HELP};

/// Handles one keyboard press on a report message: looks up the report,
/// rejects interactions with closed polls, applies the command to the
/// answer store, and re-renders only the interacted report.
///
/// Expected conditions (unknown report, closed poll, user has not voted) are
/// answered to the user and never propagate as errors.
pub async fn handle_report_interaction(
    bot: &dyn Bot,
    db: &Database,
    holidays: &dyn HolidayCalendar,
    chat_id: i64,
    message_id: i64,
    user_id: i64,
    callback_id: &str,
    command: ReportCommand,
) -> Result<()> {
    let report = match db.reports().get_report(chat_id, message_id).await {
        Ok(report) => report,
        Err(StorageError::ReportNotFound { .. }) => {
            // Reports predating a data reset are simply unknown to us.
            info!(chat_id, message_id, "Interaction with unknown report message");
            bot.answer_callback(callback_id, None, false).await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(poll) = db.polls().get_poll(&report.poll_id).await? else {
        info!(chat_id, message_id, poll_id = %report.poll_id, "Report references unknown poll");
        bot.answer_callback(callback_id, None, false).await?;
        return Ok(());
    };

    if !poll.is_open {
        info!(
            user_id,
            poll_id = %report.poll_id,
            "User tried to interact with report of closed poll"
        );
        bot.answer_callback(callback_id, Some("This poll is closed."), true)
            .await?;
        return Ok(());
    }

    let ReportKind::SingleDay { option_id } = report.kind() else {
        info!(chat_id, message_id, "Interaction with full week report ignored");
        bot.answer_callback(callback_id, None, false).await?;
        return Ok(());
    };

    let answers = db.answers();
    let poll_id = report.poll_id.as_str();

    let result = match command {
        ReportCommand::Help => {
            bot.answer_callback(callback_id, Some(DAILY_MSG_HELP), true)
                .await?;
            return Ok(());
        }
        ReportCommand::Confirm => {
            answers
                .set_override_answer(user_id, poll_id, option_id, true)
                .await
        }
        ReportCommand::Reject => {
            answers
                .set_override_answer(user_id, poll_id, option_id, false)
                .await
        }
        ReportCommand::Drive => {
            answers
                .set_driver_id(user_id, poll_id, option_id, user_id, true)
                .await
        }
        ReportCommand::Alone => {
            answers
                .set_driver_id(user_id, poll_id, option_id, DRIVER_ALONE, true)
                .await
        }
        ReportCommand::ReturnWork => {
            answers
                .set_return_time(user_id, poll_id, option_id, ReturnTime::AfterWork)
                .await
        }
        ReportCommand::ReturnDinner => {
            answers
                .set_return_time(user_id, poll_id, option_id, ReturnTime::AfterDinner)
                .await
        }
        ReportCommand::ReturnLate => {
            answers
                .set_return_time(user_id, poll_id, option_id, ReturnTime::Late)
                .await
        }
    };

    match result {
        Ok(()) => {}
        Err(StorageError::NotVoted { .. }) => {
            info!(
                user_id,
                poll_id = %report.poll_id,
                "User tried to interact with report without voting"
            );
            let text = format!(
                "You have not voted in the latest poll (id={}).",
                report.poll_id
            );
            bot.answer_callback(callback_id, Some(&text), true).await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    bot.answer_callback(callback_id, None, false).await?;

    // Targeted update: only the report that was interacted with.
    let all_answers = db.answers().get_all_answers(&report.poll_id).await?;
    update_report(bot, &all_answers, &report, holidays).await?;

    Ok(())
}
