//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    pub database_url: String,
    /// ISO country code for the holiday calendar, e.g. "IT".
    pub holiday_country: String,
    /// Subdivision code for regional holidays, e.g. "BZ". Empty disables
    /// subdivision extras.
    pub holiday_subdiv: String,
}

impl BotConfig {
    /// Loads the configuration from environment variables. Call
    /// `dotenvy::dotenv()` first so a local .env file applies.
    pub fn load() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN not set")?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./carpooler.db".to_string());
        let holiday_country = env::var("HOLIDAY_COUNTRY").unwrap_or_else(|_| "IT".to_string());
        let holiday_subdiv = env::var("HOLIDAY_SUBDIV").unwrap_or_else(|_| "BZ".to_string());

        Ok(Self {
            bot_token,
            database_url,
            holiday_country,
            holiday_subdiv,
        })
    }
}
