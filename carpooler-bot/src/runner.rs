//! Dispatcher wiring: converts teloxide updates into engine calls.

use std::sync::Arc;

use anyhow::Result;
use carpooler_core::Bot as CoreBot;
use storage::{Database, TelegramUser};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, PollAnswer};
use tracing::{debug, info};

use crate::commands::{handle_command, Command};
use crate::config::BotConfig;
use crate::holiday::{HolidayCalendar, RegionalHolidays};
use crate::poll::handle_poll_answer;
use crate::poll_report::{handle_report_interaction, ReportCommand};
use crate::scheduling::JobScheduler;
use crate::telegram::TelegramBotAdapter;

pub type HandlerResult = Result<()>;

/// Shared application context, passed explicitly to every handler.
pub struct AppState {
    pub db: Database,
    pub bot: Arc<dyn CoreBot>,
    pub holidays: Arc<dyn HolidayCalendar>,
}

/// Connects the database, builds the dispatcher, and long-polls until
/// shutdown.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let db = Database::connect(&config.database_url).await?;
    let bot = teloxide::Bot::new(config.bot_token.clone());

    let state = Arc::new(AppState {
        db,
        bot: Arc::new(TelegramBotAdapter::new(bot.clone())),
        holidays: Arc::new(RegionalHolidays::new(
            config.holiday_country.clone(),
            config.holiday_subdiv.clone(),
        )),
    });
    let scheduler = Arc::new(JobScheduler::new());

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_poll_answer().endpoint(poll_answer_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    info!("Starting carpooler bot");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, scheduler])
        .default_handler(|update| async move {
            debug!("Unhandled update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Raw vote event: merge the answers, then reconcile all reports.
async fn poll_answer_handler(answer: PollAnswer, state: Arc<AppState>) -> HandlerResult {
    let user = TelegramUser::new(answer.user.id.0 as i64, answer.user.full_name());
    let selected: Vec<i64> = answer.option_ids.iter().map(|&i| i64::from(i)).collect();

    info!(
        user_id = user.user_id,
        poll_id = %answer.poll_id,
        selected = selected.len(),
        "Received poll answer"
    );

    handle_poll_answer(
        state.bot.as_ref(),
        &state.db,
        state.holidays.as_ref(),
        &answer.poll_id,
        &user,
        &selected,
    )
    .await
}

/// Keyboard press on a report message.
async fn callback_handler(q: CallbackQuery, state: Arc<AppState>) -> HandlerResult {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(command) = ReportCommand::parse(data) else {
        debug!(data, "Unknown callback command");
        return Ok(());
    };
    let Some(message) = q.message.as_ref() else {
        // Message no longer accessible; nothing we could re-render.
        return Ok(());
    };

    handle_report_interaction(
        state.bot.as_ref(),
        &state.db,
        state.holidays.as_ref(),
        message.chat.id.0,
        i64::from(message.id.0),
        q.from.id.0 as i64,
        &q.id,
        command,
    )
    .await
}
