//! Database handle: one connect point with schema bootstrap, handing out
//! repository views over a shared pool. The handle is passed explicitly to
//! everything that touches the store.

use tracing::info;

use crate::answer_repo::PollAnswerRepository;
use crate::poll_repo::PollRepository;
use crate::report_repo::PollReportRepository;
use crate::sqlite_pool::SqlitePoolManager;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS telegram_users (
        user_id INTEGER PRIMARY KEY,
        user_fullname TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS polls (
        poll_id TEXT PRIMARY KEY,
        chat_id INTEGER NOT NULL,
        message_id INTEGER NOT NULL,
        options TEXT NOT NULL,
        is_open INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS poll_answers (
        user_id INTEGER NOT NULL REFERENCES telegram_users(user_id),
        poll_id TEXT NOT NULL REFERENCES polls(poll_id),
        poll_option_id INTEGER NOT NULL,
        poll_answer INTEGER NOT NULL,
        override_answer INTEGER,
        driver_id INTEGER,
        return_time INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (user_id, poll_id, poll_option_id)
    )",
    "CREATE TABLE IF NOT EXISTS poll_reports (
        poll_id TEXT NOT NULL REFERENCES polls(poll_id),
        chat_id INTEGER NOT NULL,
        message_id INTEGER NOT NULL,
        poll_option_id INTEGER,
        sent_timestamp INTEGER NOT NULL,
        PRIMARY KEY (chat_id, message_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_polls_chat_id ON polls(chat_id)",
    "CREATE INDEX IF NOT EXISTS idx_poll_answers_poll_id ON poll_answers(poll_id)",
    "CREATE INDEX IF NOT EXISTS idx_poll_reports_poll_id ON poll_reports(poll_id)",
];

#[derive(Clone)]
pub struct Database {
    pool_manager: SqlitePoolManager,
}

impl Database {
    /// Opens (creating if missing) the database and bootstraps the schema.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let db = Self { pool_manager };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }

        Ok(())
    }

    pub fn polls(&self) -> PollRepository {
        PollRepository::new(self.pool_manager.clone())
    }

    pub fn answers(&self) -> PollAnswerRepository {
        PollAnswerRepository::new(self.pool_manager.clone())
    }

    pub fn reports(&self) -> PollReportRepository {
        PollReportRepository::new(self.pool_manager.clone())
    }
}
