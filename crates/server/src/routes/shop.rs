//! Shop and player economy

use axum::{Json, extract::State};
use deadpool_postgres::Pool;
use dentsim_core::Item;
use serde::{Deserialize, Serialize};

use crate::db::{ItemRepository, Purchase, UserRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    roblox_id: String,
    item_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_gold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_details: Option<Item>,
}

impl BuyResponse {
    fn rejected(msg: &'static str) -> Self {
        Self {
            success: false,
            msg: Some(msg),
            new_gold: None,
            item_details: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    roblox_id: String,
    #[serde(default)]
    gold_gained: i64,
    #[serde(default)]
    xp_gained: i64,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    success: bool,
}

/// GET /api/shop/items - Items available for purchase
pub async fn list_items(State(pool): State<Pool>) -> Result<Json<Vec<Item>>, AppError> {
    let items = ItemRepository::new(pool).list_buyable().await?;
    Ok(Json(items))
}

/// POST /api/buy-item
///
/// Business rejections (unknown player or item, not enough gold, already
/// owned) are reported with `success: false` and a 200 status.
pub async fn buy_item(
    State(pool): State<Pool>,
    Json(body): Json<BuyRequest>,
) -> Result<Json<BuyResponse>, AppError> {
    let purchase = UserRepository::new(pool)
        .buy_item(&body.roblox_id, &body.item_id)
        .await?;

    let response = match purchase {
        Purchase::NotFound => BuyResponse::rejected("Data not found"),
        Purchase::InsufficientGold => BuyResponse::rejected("Gold kurang"),
        Purchase::AlreadyOwned => BuyResponse::rejected("Sudah punya"),
        Purchase::Completed { new_gold, item } => {
            tracing::info!(
                roblox_id = %body.roblox_id,
                item_id = %item.item_id,
                price = item.price,
                new_gold,
                "Item purchased"
            );
            BuyResponse {
                success: true,
                msg: None,
                new_gold: Some(new_gold),
                item_details: Some(item),
            }
        }
    };

    Ok(Json(response))
}

/// POST /api/update-progress - Credit gold and xp earned in a case
pub async fn update_progress(
    State(pool): State<Pool>,
    Json(body): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let success = UserRepository::new(pool)
        .add_progress(&body.roblox_id, body.gold_gained, body.xp_gained)
        .await?;

    if !success {
        tracing::warn!(roblox_id = %body.roblox_id, "Progress for unknown player");
    }
    Ok(Json(ProgressResponse { success }))
}
