use deadpool_postgres::Pool;
use dentsim_core::{InventoryEntry, Item, PatientProfile};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

use super::catalog::{ITEM_COLUMNS, item_from_row};
use crate::error::AppError;

/// A player account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub username: Option<String>,
    pub roblox_id: Option<String>,
    pub roblox_username: Option<String>,
    pub xp: i64,
    pub level: i32,
    pub gold: i64,
}

/// Payload for seeding a user account
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roblox_id: Option<String>,
    #[serde(default)]
    pub roblox_username: Option<String>,
    #[serde(default)]
    pub xp: i64,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default = "default_gold")]
    pub gold: i64,
}

fn default_level() -> i32 {
    1
}

fn default_gold() -> i64 {
    1000
}

/// Outcome of a shop purchase
#[derive(Debug)]
pub enum Purchase {
    /// User or item does not exist
    NotFound,
    InsufficientGold,
    AlreadyOwned,
    Completed { new_gold: i64, item: Item },
}

fn user_from_row(row: &Row) -> UserRecord {
    UserRecord {
        user_id: row.get("user_id"),
        username: row.get("username"),
        roblox_id: row.get("roblox_id"),
        roblox_username: row.get("roblox_username"),
        xp: row.get("xp"),
        level: row.get("level"),
        gold: row.get("gold"),
    }
}

/// Repository for player accounts, inventory and progress
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool,
}

impl UserRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &NewUser) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO users (user_id, username, roblox_id, roblox_username, xp, level, gold)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
                &[
                    &user.user_id,
                    &user.username,
                    &user.roblox_id,
                    &user.roblox_username,
                    &user.xp,
                    &user.level,
                    &user.gold,
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn find_by_roblox_id(&self, roblox_id: &str) -> Result<Option<UserRecord>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT user_id, username, roblox_id, roblox_username, xp, level, gold
                 FROM users WHERE roblox_id = $1",
                &[&roblox_id],
            )
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    /// Owned items merged with catalog details, oldest first
    pub async fn inventory(&self, user_id: &str) -> Result<Vec<InventoryEntry>, AppError> {
        let client = self.pool.get().await?;
        let sql = format!(
            "SELECT inv.item_id AS owned_id, i.item_id IS NOT NULL AS in_catalog, {ITEM_COLUMNS}
             FROM inventory inv
             LEFT JOIN items i ON i.item_id = inv.item_id
             WHERE inv.user_id = $1
             ORDER BY inv.obtained_at, inv.item_id"
        );
        let rows = client.query(sql.as_str(), &[&user_id]).await?;

        Ok(rows
            .iter()
            .map(|row| {
                let owned_id: String = row.get("owned_id");
                let in_catalog: bool = row.get("in_catalog");
                let item = in_catalog.then(|| item_from_row(row));
                InventoryEntry::from_catalog(owned_id, item.as_ref())
            })
            .collect())
    }

    /// Buy an item, locking the user row for the whole check-and-debit
    pub async fn buy_item(&self, roblox_id: &str, item_id: &str) -> Result<Purchase, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let user = tx
            .query_opt(
                "SELECT user_id, gold FROM users WHERE roblox_id = $1 FOR UPDATE",
                &[&roblox_id],
            )
            .await?;
        let item_sql = format!("SELECT {ITEM_COLUMNS} FROM items i WHERE i.item_id = $1");
        let item = tx.query_opt(item_sql.as_str(), &[&item_id]).await?;

        let (Some(user), Some(item)) = (user, item) else {
            return Ok(Purchase::NotFound);
        };
        let user_id: String = user.get("user_id");
        let gold: i64 = user.get("gold");
        let item = item_from_row(&item);

        if gold < item.price {
            return Ok(Purchase::InsufficientGold);
        }

        let owned = tx
            .query_opt(
                "SELECT 1 FROM inventory WHERE user_id = $1 AND item_id = $2",
                &[&user_id, &item.item_id],
            )
            .await?;
        if owned.is_some() {
            return Ok(Purchase::AlreadyOwned);
        }

        let row = tx
            .query_one(
                "UPDATE users SET gold = gold - $2 WHERE user_id = $1 RETURNING gold",
                &[&user_id, &item.price],
            )
            .await?;
        let new_gold: i64 = row.get(0);

        tx.execute(
            "INSERT INTO inventory (user_id, item_id) VALUES ($1, $2)",
            &[&user_id, &item.item_id],
        )
        .await?;
        tx.commit().await?;

        Ok(Purchase::Completed { new_gold, item })
    }

    /// Add gold and xp. Returns false if no user has this Roblox id.
    pub async fn add_progress(&self, roblox_id: &str, gold: i64, xp: i64) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let updated = client
            .execute(
                "UPDATE users SET gold = gold + $2, xp = xp + $3 WHERE roblox_id = $1",
                &[&roblox_id, &gold, &xp],
            )
            .await?;
        Ok(updated > 0)
    }

    /// Remember the patient generated for the user's current session
    pub async fn save_session(&self, roblox_id: &str, patient: &PatientProfile) -> Result<bool, AppError> {
        let profile = serde_json::to_value(patient)?;
        let client = self.pool.get().await?;
        let updated = client
            .execute(
                "UPDATE users SET current_session = $2, session_started_at = now()
                 WHERE roblox_id = $1",
                &[&roblox_id, &profile],
            )
            .await?;
        Ok(updated > 0)
    }
}

/// A Roblox account allowed to play without a user record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    pub roblox_id: String,
    #[serde(default)]
    pub added_by: Option<String>,
}

#[derive(Clone)]
pub struct WhitelistRepository {
    pool: Pool,
}

impl WhitelistRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, entry: &WhitelistEntry) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO whitelist (roblox_id, added_by) VALUES ($1, $2)",
                &[&entry.roblox_id, &entry.added_by],
            )
            .await?;
        Ok(())
    }

    pub async fn contains(&self, roblox_id: &str) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt("SELECT 1 FROM whitelist WHERE roblox_id = $1", &[&roblox_id])
            .await?;
        Ok(row.is_some())
    }
}
