use deadpool_postgres::Pool;

use crate::error::AppError;

const SOURCE_ROBLOX: &str = "roblox";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The player, acting as the dentist
    User,
    /// The AI patient
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// Per-user chat log, capped to the newest `limit` messages
#[derive(Clone)]
pub struct ChatRepository {
    pool: Pool,
    limit: i64,
}

impl ChatRepository {
    pub fn new(pool: Pool, limit: i64) -> Self {
        Self { pool, limit }
    }

    /// Append a message and drop the oldest ones past the limit.
    ///
    /// Returns false (and stores nothing) if no user has this Roblox id.
    pub async fn append(&self, roblox_id: &str, role: ChatRole, text: &str) -> Result<bool, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx
            .query_opt(
                "INSERT INTO chat_messages (user_id, source, role, text)
                 SELECT user_id, $2::text, $3::text, $4::text FROM users WHERE roblox_id = $1
                 RETURNING user_id",
                &[&roblox_id, &SOURCE_ROBLOX, &role.as_str(), &text],
            )
            .await?;

        let Some(row) = row else {
            return Ok(false);
        };
        let user_id: String = row.get(0);

        let pruned = tx
            .execute(
                "DELETE FROM chat_messages
                 WHERE user_id = $1 AND id NOT IN (
                     SELECT id FROM chat_messages WHERE user_id = $1 ORDER BY id DESC LIMIT $2
                 )",
                &[&user_id, &self.limit],
            )
            .await?;
        tx.commit().await?;

        if pruned > 0 {
            tracing::debug!(user_id = %user_id, pruned = pruned, "Pruned chat history");
        }
        Ok(true)
    }
}
