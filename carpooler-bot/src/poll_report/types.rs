//! Report interaction vocabulary: callback commands, the default keyboard,
//! and the help legend.

use carpooler_core::{InlineButton, InlineKeyboard};

/// Commands carried in the callback data of the daily report keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCommand {
    Confirm,
    Reject,
    Drive,
    Alone,
    ReturnWork,
    ReturnDinner,
    ReturnLate,
    Help,
}

impl ReportCommand {
    pub fn as_callback_data(self) -> &'static str {
        match self {
            Self::Confirm => "daily_msg:confirm",
            Self::Reject => "daily_msg:reject",
            Self::Drive => "daily_msg:drive",
            Self::Alone => "daily_msg:alone",
            Self::ReturnWork => "daily_msg:return:work",
            Self::ReturnDinner => "daily_msg:return:dinner",
            Self::ReturnLate => "daily_msg:return:late",
            Self::Help => "daily_msg:help",
        }
    }

    /// Parses callback data back into a command. Unknown data (e.g. from a
    /// message predating a keyboard change) yields None.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "daily_msg:confirm" => Some(Self::Confirm),
            "daily_msg:reject" => Some(Self::Reject),
            "daily_msg:drive" => Some(Self::Drive),
            "daily_msg:alone" => Some(Self::Alone),
            "daily_msg:return:work" => Some(Self::ReturnWork),
            "daily_msg:return:dinner" => Some(Self::ReturnDinner),
            "daily_msg:return:late" => Some(Self::ReturnLate),
            "daily_msg:help" => Some(Self::Help),
            _ => None,
        }
    }
}

pub const DAILY_MSG_HELP: &str = "\
✅ Yes
🚗 Driver
👤 Alone
❌ No
💼 Return after work
🍽 Return after dinner
🎯 Return late";

/// The keyboard attached to every single-day report.
pub fn default_keyboard() -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![
            InlineButton::new("✅", ReportCommand::Confirm.as_callback_data()),
            InlineButton::new("👤", ReportCommand::Alone.as_callback_data()),
            InlineButton::new("🚗", ReportCommand::Drive.as_callback_data()),
            InlineButton::new("❌", ReportCommand::Reject.as_callback_data()),
        ],
        vec![
            InlineButton::new("💼", ReportCommand::ReturnWork.as_callback_data()),
            InlineButton::new("🍽", ReportCommand::ReturnDinner.as_callback_data()),
            InlineButton::new("🎯", ReportCommand::ReturnLate.as_callback_data()),
        ],
        vec![InlineButton::new(
            "❓HELP",
            ReportCommand::Help.as_callback_data(),
        )],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_data_round_trip() {
        for command in [
            ReportCommand::Confirm,
            ReportCommand::Reject,
            ReportCommand::Drive,
            ReportCommand::Alone,
            ReportCommand::ReturnWork,
            ReportCommand::ReturnDinner,
            ReportCommand::ReturnLate,
            ReportCommand::Help,
        ] {
            assert_eq!(ReportCommand::parse(command.as_callback_data()), Some(command));
        }
    }

    #[test]
    fn test_unknown_callback_data() {
        assert_eq!(ReportCommand::parse("daily_msg:unknown"), None);
        assert_eq!(ReportCommand::parse(""), None);
    }

    #[test]
    fn test_default_keyboard_layout() {
        let keyboard = default_keyboard();

        assert_eq!(keyboard.rows.len(), 3);
        assert_eq!(keyboard.rows[0].len(), 4);
        assert_eq!(keyboard.rows[1].len(), 3);
        assert_eq!(keyboard.rows[2].len(), 1);
    }
}
