//! Roblox login and player data load

use axum::{
    Json,
    extract::{Path, State},
};
use deadpool_postgres::Pool;
use dentsim_core::InventoryEntry;
use serde::Serialize;

use crate::db::{UserRepository, WhitelistRepository};
use crate::error::AppError;

const GUEST_NAME: &str = "Guest";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    authorized: bool,
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xp: Option<i64>,
    inventory: Vec<InventoryEntry>,
}

/// GET /api/roblox-login/{robloxId}
///
/// Registered players get their balance and inventory. Unknown players are
/// authorized as guests only if their Roblox id is whitelisted.
pub async fn roblox_login(
    State(pool): State<Pool>,
    Path(roblox_id): Path<String>,
) -> Result<Json<LoginResponse>, AppError> {
    let users = UserRepository::new(pool.clone());

    if let Some(user) = users.find_by_roblox_id(&roblox_id).await? {
        let inventory = users.inventory(&user.user_id).await?;
        tracing::info!(user_id = %user.user_id, items = inventory.len(), "Player logged in");

        return Ok(Json(LoginResponse {
            authorized: true,
            username: user.username,
            gold: Some(user.gold),
            xp: Some(user.xp),
            inventory,
        }));
    }

    let whitelisted = WhitelistRepository::new(pool).contains(&roblox_id).await?;
    tracing::info!(roblox_id = %roblox_id, whitelisted, "Login without user record");

    Ok(Json(LoginResponse {
        authorized: whitelisted,
        username: whitelisted.then(|| GUEST_NAME.to_string()),
        gold: None,
        xp: None,
        inventory: Vec::new(),
    }))
}
