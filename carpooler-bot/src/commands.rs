//! Chat command vocabulary and handlers.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;
use tracing::info;

use crate::poll::send_weekly_poll;
use crate::poll_report::{send_daily_report, send_full_report};
use crate::runner::{AppState, HandlerResult};
use crate::scheduling::JobScheduler;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "send the weekly poll now.")]
    Poll,
    #[command(description = "show the full week attendance summary.")]
    PollResults,
    #[command(description = "show who is going on site tomorrow.")]
    WhosTomorrow,
    #[command(description = "enable the weekly schedule, args: poll hour and report hour.")]
    EnableSchedule(String),
    #[command(description = "disable automatic messages.")]
    DisableSchedule,
    #[command(description = "display bot version.")]
    Version,
    #[command(description = "show this help.")]
    Help,
}

pub async fn handle_command(
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
    scheduler: Arc<JobScheduler>,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;

    match cmd {
        Command::Poll => {
            if scheduler.jobs_exist(&chat_id.to_string()).await {
                state
                    .bot
                    .send_message(
                        chat_id,
                        "Schedule is enabled, to manually send poll, disable schedule first.",
                        None,
                    )
                    .await?;
                return Ok(());
            }
            send_weekly_poll(state.bot.as_ref(), &state.db, chat_id).await
        }
        Command::PollResults => send_full_report(state.bot.as_ref(), &state.db, chat_id).await,
        Command::WhosTomorrow => {
            send_daily_report(state.bot.as_ref(), &state.db, state.holidays.as_ref(), chat_id)
                .await
        }
        Command::EnableSchedule(args) => enable_schedule(&state, &scheduler, chat_id, &args).await,
        Command::DisableSchedule => {
            let removed = scheduler.remove_jobs(&chat_id.to_string()).await;
            let text = if removed {
                "Schedule has been disabled."
            } else {
                "Schedule was not enabled."
            };
            info!(chat_id, "User disabled schedule");
            state.bot.send_message(chat_id, text, None).await?;
            Ok(())
        }
        Command::Version => {
            let text = format!("carpooler-bot {}", env!("CARGO_PKG_VERSION"));
            state.bot.send_message(chat_id, &text, None).await?;
            Ok(())
        }
        Command::Help => {
            state
                .bot
                .send_message(chat_id, &Command::descriptions().to_string(), None)
                .await?;
            Ok(())
        }
    }
}

/// Registers the chat's two cron jobs: the weekly poll on Sunday and the
/// daily report Sunday through Thursday (each report covers the day after).
async fn enable_schedule(
    state: &Arc<AppState>,
    scheduler: &Arc<JobScheduler>,
    chat_id: i64,
    args: &str,
) -> HandlerResult {
    if scheduler.jobs_exist(&chat_id.to_string()).await {
        state
            .bot
            .send_message(chat_id, "Schedule is already present, delete it first.", None)
            .await?;
        return Ok(());
    }

    let Some((poll_hour, report_hour)) = parse_schedule_hours(args) else {
        state
            .bot
            .send_message(
                chat_id,
                "Usage: /enable_schedule POLL_HOUR TOMORROW_MESSAGE_HOUR",
                None,
            )
            .await?;
        return Ok(());
    };

    let poll_state = state.clone();
    scheduler
        .add_cron_job(
            &chat_id.to_string(),
            &format!("0 0 {poll_hour} * * Sun"),
            move || {
                let state = poll_state.clone();
                async move { send_weekly_poll(state.bot.as_ref(), &state.db, chat_id).await }
            },
        )
        .await?;

    let report_state = state.clone();
    scheduler
        .add_cron_job(
            &chat_id.to_string(),
            &format!("0 0 {report_hour} * * Sun,Mon,Tue,Wed,Thu"),
            move || {
                let state = report_state.clone();
                async move {
                    send_daily_report(
                        state.bot.as_ref(),
                        &state.db,
                        state.holidays.as_ref(),
                        chat_id,
                    )
                    .await
                }
            },
        )
        .await?;

    let text = format!(
        "Schedule has been enabled with the following settings:\n\n\
         - Poll will be sent every Sunday at {poll_hour}:00.\n\
         - Tomorrow's people message will be sent at {report_hour}:00."
    );
    info!(chat_id, poll_hour, report_hour, "User enabled schedule");
    state.bot.send_message(chat_id, &text, None).await?;

    Ok(())
}

fn parse_schedule_hours(args: &str) -> Option<(u8, u8)> {
    let mut parts = args.split_whitespace();
    let poll_hour: u8 = parts.next()?.parse().ok()?;
    let report_hour: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || poll_hour > 23 || report_hour > 23 {
        return None;
    }
    Some((poll_hour, report_hour))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule_hours_valid() {
        assert_eq!(parse_schedule_hours("8 18"), Some((8, 18)));
        assert_eq!(parse_schedule_hours("  0   23 "), Some((0, 23)));
    }

    #[test]
    fn test_parse_schedule_hours_invalid() {
        assert_eq!(parse_schedule_hours(""), None);
        assert_eq!(parse_schedule_hours("8"), None);
        assert_eq!(parse_schedule_hours("8 18 3"), None);
        assert_eq!(parse_schedule_hours("eight 18"), None);
        assert_eq!(parse_schedule_hours("8 24"), None);
        assert_eq!(parse_schedule_hours("-1 18"), None);
    }
}
