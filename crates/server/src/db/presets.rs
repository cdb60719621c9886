use deadpool_postgres::Pool;
use dentsim_core::{Gender, PresetLookup, VisualPreset};
use tokio_postgres::Row;

use crate::error::AppError;

fn preset_from_row(row: &Row, gender: Gender) -> VisualPreset {
    VisualPreset {
        preset_id: row.get("preset_id"),
        gender,
        shirt_id: row.get("shirt_id"),
        pants_id: row.get("pants_id"),
        face_id: row.get("face_id"),
        hair_id: row.get("hair_id"),
        accessory_id: row.get("accessory_id"),
    }
}

/// Repository for NPC visual presets
#[derive(Clone)]
pub struct PresetRepository {
    pool: Pool,
}

impl PresetRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, preset: &VisualPreset) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO npc_presets (preset_id, gender, shirt_id, pants_id, face_id, hair_id, accessory_id)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
                &[
                    &preset.preset_id,
                    &preset.gender.as_str(),
                    &preset.shirt_id,
                    &preset.pants_id,
                    &preset.face_id,
                    &preset.hair_id,
                    &preset.accessory_id,
                ],
            )
            .await?;
        Ok(())
    }
}

impl PresetLookup for PresetRepository {
    type Error = AppError;

    async fn sample(&self, gender: Gender) -> Result<Option<VisualPreset>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT preset_id, shirt_id, pants_id, face_id, hair_id, accessory_id
                 FROM npc_presets WHERE gender = $1
                 ORDER BY random() LIMIT 1",
                &[&gender.as_str()],
            )
            .await?;

        Ok(row.map(|row| preset_from_row(&row, gender)))
    }
}
