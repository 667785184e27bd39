//! Pure report rendering: poll answers in, HTML message text out.

use chrono::{Datelike, NaiveDate, Weekday};
use storage::{PollAnswer, ReturnTime};

use crate::holiday::HolidayCalendar;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn day_name(option_id: i64) -> &'static str {
    usize::try_from(option_id)
        .ok()
        .and_then(|i| DAY_NAMES.get(i))
        .copied()
        .unwrap_or("Unknown day")
}

/// One user line: return-time marker, then going/driving marker, then the
/// fullname, wrapped in a mention link.
pub fn format_user_answer(answer: &PollAnswer) -> String {
    let mut formatted = answer.user_fullname.clone();

    if answer.is_driving() {
        formatted = format!("🚗 {formatted}");
    } else if answer.is_alone() {
        formatted = format!("👤 {formatted}");
    }

    match ReturnTime::from_db(answer.return_time) {
        ReturnTime::AfterWork => {}
        ReturnTime::AfterDinner => formatted = format!("🍽 {formatted}"),
        ReturnTime::Late => formatted = format!("🎯 {formatted}"),
    }

    format!("<a href=\"tg://user?id={}\">{}</a>", answer.user_id, formatted)
}

/// Answers that count as "going", sorted case-insensitively by fullname.
/// The override wins whenever it is set, in both directions.
pub fn sorted_positive_answers<'a>(
    answers: impl IntoIterator<Item = &'a PollAnswer>,
) -> Vec<&'a PollAnswer> {
    let mut relevant: Vec<&PollAnswer> = answers
        .into_iter()
        .filter(|a| a.is_positive())
        .collect();
    relevant.sort_by_key(|a| a.user_fullname.to_lowercase());
    relevant
}

/// Single-day report text for `day`. Weekends and holidays short-circuit
/// before any answer is considered.
pub fn whos_on_text(
    answers: &[PollAnswer],
    day: NaiveDate,
    holidays: &dyn HolidayCalendar,
) -> String {
    let weekday = day.weekday();

    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return "You are not working tomorrow, are you?".to_string();
    }

    if let Some(holiday) = holidays.holiday_name(day) {
        return format!("I hope you are on holiday tomorrow, happy <b>{holiday}</b>!");
    }

    let option_id = i64::from(weekday.num_days_from_monday());
    let name = day_name(option_id);

    let relevant =
        sorted_positive_answers(answers.iter().filter(|a| a.poll_option_id == option_id));
    if relevant.is_empty() {
        return format!("Nobody is going on site on <b>{name}</b>.");
    }

    let formatted_users: Vec<String> = relevant.iter().map(|a| format_user_answer(a)).collect();

    format!(
        "On <b>{name}</b> is going on site:\n\n{}",
        formatted_users.join("\n")
    )
}

/// Full-week report text: one block per option with qualifying answers, in
/// option order. Days nobody is going are omitted entirely.
pub fn full_poll_result(answers: &[PollAnswer]) -> String {
    let mut option_ids: Vec<i64> = answers.iter().map(|a| a.poll_option_id).collect();
    option_ids.sort_unstable();
    option_ids.dedup();

    let blocks: Vec<String> = option_ids
        .into_iter()
        .filter_map(|option_id| {
            let relevant =
                sorted_positive_answers(answers.iter().filter(|a| a.poll_option_id == option_id));
            if relevant.is_empty() {
                return None;
            }
            let lines: Vec<String> = relevant.iter().map(|a| format_user_answer(a)).collect();
            Some(format!("<b>{}</b>:\n{}", day_name(option_id), lines.join("\n")))
        })
        .collect();

    if blocks.is_empty() {
        return "Nobody is going on site this week.".to_string();
    }

    blocks.join("\n\n")
}
