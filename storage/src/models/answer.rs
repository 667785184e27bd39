//! Poll answer model: one row per (user, poll, option).

use serde::{Deserialize, Serialize};

/// Sentinel `driver_id` meaning "going alone", distinct from any real
/// Telegram user id (which are positive).
pub const DRIVER_ALONE: i64 = -1;

/// Return time preference for a single day. `AfterWork` is the unmarked
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnTime {
    #[default]
    AfterWork,
    AfterDinner,
    Late,
}

impl ReturnTime {
    /// Decodes the stored integer; unknown values fall back to the default.
    pub fn from_db(value: i64) -> Self {
        match value {
            1 => Self::AfterDinner,
            2 => Self::Late,
            _ => Self::AfterWork,
        }
    }

    pub fn as_db(self) -> i64 {
        match self {
            Self::AfterWork => 0,
            Self::AfterDinner => 1,
            Self::Late => 2,
        }
    }
}

/// One user's answer for one poll option, joined with the user's fullname.
///
/// `poll_answer` is the raw vote; `override_answer` supersedes it for
/// rendering whenever set. `driver_id` equal to `user_id` means driving,
/// [`DRIVER_ALONE`] means going alone, any other id means riding with that
/// driver.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PollAnswer {
    pub user_id: i64,
    pub poll_id: String,
    pub poll_option_id: i64,
    pub poll_answer: bool,
    pub override_answer: Option<bool>,
    pub driver_id: Option<i64>,
    pub return_time: i64,
    pub user_fullname: String,
}

impl PollAnswer {
    /// Answer with raw vote only, annotations at their defaults.
    pub fn new(
        user_id: i64,
        user_fullname: impl Into<String>,
        poll_id: impl Into<String>,
        poll_option_id: i64,
        poll_answer: bool,
    ) -> Self {
        Self {
            user_id,
            poll_id: poll_id.into(),
            poll_option_id,
            poll_answer,
            override_answer: None,
            driver_id: None,
            return_time: ReturnTime::AfterWork.as_db(),
            user_fullname: user_fullname.into(),
        }
    }

    /// Whether this row counts as "going on site": the override wins whenever
    /// it is set, otherwise the raw vote.
    pub fn is_positive(&self) -> bool {
        self.override_answer.unwrap_or(self.poll_answer)
    }

    pub fn is_driving(&self) -> bool {
        self.driver_id == Some(self.user_id)
    }

    pub fn is_alone(&self) -> bool {
        self.driver_id == Some(DRIVER_ALONE)
    }
}
