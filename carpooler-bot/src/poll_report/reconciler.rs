//! Report reconciliation: re-render and push edits to outstanding reports,
//! and send new report messages on demand.

use std::time::Duration;

use anyhow::Result;
use carpooler_core::{Bot, BotError, InlineKeyboard};
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use storage::{Database, PollAnswer, PollReport, ReportKind};
use tracing::{error, info};

use crate::holiday::HolidayCalendar;
use crate::poll_report::renderer::{full_poll_result, whos_on_text};
use crate::poll_report::types::default_keyboard;

/// Pause between consecutive edits so a large batch stays under the
/// transport's rate limit.
const EDIT_PACING: Duration = Duration::from_millis(200);

/// A single-day report always shows the day after it was sent.
fn report_target_day(sent_timestamp: i64) -> NaiveDate {
    let sent = Local
        .timestamp_opt(sent_timestamp, 0)
        .earliest()
        .unwrap_or_else(Local::now);
    (sent + chrono::Duration::days(1)).date_naive()
}

fn render_report(
    answers: &[PollAnswer],
    report: &PollReport,
    holidays: &dyn HolidayCalendar,
) -> (String, Option<InlineKeyboard>) {
    match report.kind() {
        ReportKind::FullWeek => (full_poll_result(answers), None),
        ReportKind::SingleDay { .. } => (
            whos_on_text(answers, report_target_day(report.sent_timestamp), holidays),
            Some(default_keyboard()),
        ),
    }
}

/// Re-renders one report and pushes the edit. An edit rejected because the
/// content is unchanged is the expected steady state, not a failure.
pub async fn update_report(
    bot: &dyn Bot,
    answers: &[PollAnswer],
    report: &PollReport,
    holidays: &dyn HolidayCalendar,
) -> std::result::Result<(), BotError> {
    let (text, keyboard) = render_report(answers, report, holidays);

    match bot
        .edit_message_text(report.chat_id, report.message_id, &text, keyboard.as_ref())
        .await
    {
        Ok(()) => Ok(()),
        Err(e) if e.is_message_not_modified() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Re-renders every outstanding report for the poll. Answers are loaded once
/// and shared across all reports. One report's failure is logged and does not
/// abort the rest of the batch.
pub async fn update_all_reports(
    bot: &dyn Bot,
    db: &Database,
    holidays: &dyn HolidayCalendar,
    poll_id: &str,
) -> Result<()> {
    let reports = db.reports().get_all_reports(poll_id).await?;
    let answers = db.answers().get_all_answers(poll_id).await?;

    for report in &reports {
        if let Err(e) = update_report(bot, &answers, report, holidays).await {
            error!(
                chat_id = report.chat_id,
                message_id = report.message_id,
                error = %e,
                "Failed to update poll report"
            );
        }
        tokio::time::sleep(EDIT_PACING).await;
    }

    Ok(())
}

/// Sends a fresh single-day report for tomorrow and registers it for future
/// reconciliation.
pub async fn send_daily_report(
    bot: &dyn Bot,
    db: &Database,
    holidays: &dyn HolidayCalendar,
    chat_id: i64,
) -> Result<()> {
    let Some(latest_poll) = db.polls().get_latest_poll(chat_id).await? else {
        bot.send_message(chat_id, "No Polls found.", None).await?;
        return Ok(());
    };

    let answers = db.answers().get_all_answers(&latest_poll.poll_id).await?;
    let tomorrow = (Local::now() + chrono::Duration::days(1)).date_naive();
    let keyboard = default_keyboard();

    let sent = bot
        .send_message(
            chat_id,
            &whos_on_text(&answers, tomorrow, holidays),
            Some(&keyboard),
        )
        .await?;

    db.reports()
        .insert_report(
            &latest_poll.poll_id,
            sent.chat_id,
            sent.message_id,
            Some(i64::from(tomorrow.weekday().num_days_from_monday())),
            sent.date.timestamp(),
        )
        .await?;

    info!(chat_id, poll_id = %latest_poll.poll_id, "Sent daily poll report");

    Ok(())
}

/// Sends a fresh full-week report and registers it for future reconciliation.
pub async fn send_full_report(bot: &dyn Bot, db: &Database, chat_id: i64) -> Result<()> {
    let Some(latest_poll) = db.polls().get_latest_poll(chat_id).await? else {
        bot.send_message(chat_id, "No Polls found.", None).await?;
        return Ok(());
    };

    let answers = db.answers().get_all_answers(&latest_poll.poll_id).await?;

    let sent = bot
        .send_message(chat_id, &full_poll_result(&answers), None)
        .await?;

    db.reports()
        .insert_report(
            &latest_poll.poll_id,
            sent.chat_id,
            sent.message_id,
            None,
            sent.date.timestamp(),
        )
        .await?;

    info!(chat_id, poll_id = %latest_poll.poll_id, "Sent full week poll report");

    Ok(())
}
