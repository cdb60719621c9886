//! NPC visual presets and the lookup capability the generator depends on

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::demographics::Gender;

/// Roblox appearance assets for one patient look
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisualPreset {
    #[serde(default)]
    pub preset_id: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub shirt_id: Option<String>,
    #[serde(default)]
    pub pants_id: Option<String>,
    #[serde(default)]
    pub face_id: Option<String>,
    #[serde(default)]
    pub hair_id: Option<String>,
    #[serde(default)]
    pub accessory_id: Option<String>,
}

/// Source of visual presets.
///
/// `sample` returns one preset chosen at random among those matching
/// `gender`, `Ok(None)` when nothing matches, and `Err` only when the
/// backing store itself failed.
pub trait PresetLookup {
    type Error: std::error::Error + Send + Sync + 'static;

    fn sample(
        &self,
        gender: Gender,
    ) -> impl Future<Output = Result<Option<VisualPreset>, Self::Error>> + Send;
}
