mod cases;
mod catalog;
mod chat;
mod presets;
mod users;

pub use cases::CaseRepository;
pub use catalog::{AchievementRepository, ItemRepository};
pub use chat::{ChatRepository, ChatRole};
pub use presets::PresetRepository;
pub use users::{NewUser, Purchase, UserRecord, UserRepository, WhitelistEntry, WhitelistRepository};

use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Create a connection pool from a database URL
pub async fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Create tables and indexes that do not exist yet
pub async fn init_schema(pool: &Pool) -> Result<(), crate::error::AppError> {
    let client = pool.get().await?;
    client.batch_execute(SCHEMA).await?;
    tracing::info!("Database schema ready");
    Ok(())
}
