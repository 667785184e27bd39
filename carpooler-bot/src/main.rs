//! Carpooler bot binary.

use anyhow::Result;
use carpooler_bot::{run_bot, BotConfig};
use carpooler_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = BotConfig::load()?;
    run_bot(config).await
}
