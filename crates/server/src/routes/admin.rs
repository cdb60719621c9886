//! Admin seeding endpoints for master data

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use deadpool_postgres::Pool;
use dentsim_core::{Achievement, ConstraintWarning, Item, MedicalCase, VisualPreset};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::db::{
    AchievementRepository, CaseRepository, ItemRepository, NewUser, PresetRepository,
    UserRepository, WhitelistEntry, WhitelistRepository,
};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    msg: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

fn saved(msg: &'static str) -> (StatusCode, Json<SavedResponse>) {
    saved_with_warnings(msg, &[])
}

fn saved_with_warnings(
    msg: &'static str,
    warnings: &[ConstraintWarning],
) -> (StatusCode, Json<SavedResponse>) {
    (
        StatusCode::CREATED,
        Json(SavedResponse {
            msg,
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
        }),
    )
}

/// POST /api/items
pub async fn create_item(
    State(pool): State<Pool>,
    Json(item): Json<Item>,
) -> Result<impl IntoResponse, AppError> {
    ItemRepository::new(pool).create(&item).await?;
    tracing::info!(item_id = %item.item_id, "Item created");
    Ok(saved("Item Saved"))
}

/// POST /api/medical-case
///
/// The demographic block is validated before storing. Contradictions are
/// rejected with 400; suspicious combinations are stored and echoed back
/// as `warnings`.
pub async fn create_case(
    State(pool): State<Pool>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let case: MedicalCase = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid medical case: {}", e)))?;
    let warnings = case.demographics.validate()?;
    for warning in &warnings {
        tracing::warn!(case_id = %case.case_id, warning = %warning, "Case demographics look wrong");
    }

    CaseRepository::new(pool).create(&case).await?;
    tracing::info!(case_id = %case.case_id, "Medical case created");
    Ok(saved_with_warnings("Case Saved", &warnings))
}

/// POST /api/achievements
pub async fn create_achievement(
    State(pool): State<Pool>,
    Json(achievement): Json<Achievement>,
) -> Result<impl IntoResponse, AppError> {
    AchievementRepository::new(pool).create(&achievement).await?;
    tracing::info!(achieve_id = %achievement.achieve_id, "Achievement created");
    Ok(saved("Achievement Saved"))
}

/// POST /api/npc-presets
pub async fn create_preset(
    State(pool): State<Pool>,
    Json(preset): Json<VisualPreset>,
) -> Result<impl IntoResponse, AppError> {
    PresetRepository::new(pool).create(&preset).await?;
    tracing::info!(preset_id = ?preset.preset_id, gender = %preset.gender, "NPC preset created");
    Ok(saved("NPC Preset Saved"))
}

/// POST /api/whitelist
pub async fn add_to_whitelist(
    State(pool): State<Pool>,
    Json(entry): Json<WhitelistEntry>,
) -> Result<impl IntoResponse, AppError> {
    WhitelistRepository::new(pool).add(&entry).await?;
    tracing::info!(roblox_id = %entry.roblox_id, "Whitelisted");
    Ok(saved("Whitelisted"))
}

/// POST /api/users
pub async fn create_user(
    State(pool): State<Pool>,
    Json(user): Json<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(pool).create(&user).await?;
    tracing::info!(user_id = %user.user_id, "User created");
    Ok(saved("User Saved"))
}
