use deadpool_postgres::Pool;
use dentsim_core::{Achievement, Item};
use tokio_postgres::Row;

use crate::error::AppError;

/// Item columns, selected from the `items` table aliased as `i`
pub(super) const ITEM_COLUMNS: &str =
    "i.item_id, i.display_name, i.description, i.icon, i.category, i.price, i.is_buyable, i.rarity";

pub(super) fn item_from_row(row: &Row) -> Item {
    Item {
        item_id: row.get("item_id"),
        display_name: row.get("display_name"),
        description: row.get("description"),
        icon: row.get("icon"),
        category: row.get("category"),
        price: row.get("price"),
        is_buyable: row.get("is_buyable"),
        rarity: row.get("rarity"),
    }
}

/// Repository for the item catalog
#[derive(Clone)]
pub struct ItemRepository {
    pool: Pool,
}

impl ItemRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &Item) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO items (item_id, display_name, description, icon, category, price, is_buyable, rarity)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                &[
                    &item.item_id,
                    &item.display_name,
                    &item.description,
                    &item.icon,
                    &item.category,
                    &item.price,
                    &item.is_buyable,
                    &item.rarity,
                ],
            )
            .await?;
        Ok(())
    }

    /// Items listed in the shop
    pub async fn list_buyable(&self) -> Result<Vec<Item>, AppError> {
        let client = self.pool.get().await?;
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items i WHERE i.is_buyable ORDER BY i.price, i.item_id");
        let rows = client.query(sql.as_str(), &[]).await?;
        Ok(rows.iter().map(item_from_row).collect())
    }
}

/// Repository for achievement definitions
#[derive(Clone)]
pub struct AchievementRepository {
    pool: Pool,
}

impl AchievementRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, achievement: &Achievement) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO achievements (achieve_id, title, description, target_count, reward_gold, reward_xp)
                 VALUES ($1, $2, $3, $4, $5, $6)",
                &[
                    &achievement.achieve_id,
                    &achievement.title,
                    &achievement.description,
                    &achievement.target_count,
                    &achievement.reward_gold,
                    &achievement.reward_xp,
                ],
            )
            .await?;
        Ok(())
    }
}
