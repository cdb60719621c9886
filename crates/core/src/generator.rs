//! Patient profile randomizer
//!
//! Turns a case's [`Demographics`] into a concrete [`PatientProfile`]: the
//! gender is resolved (coin flip for `Any`), an age is drawn from the
//! inclusive range, a name is drawn from the matching table, and a visual
//! preset is fetched through a [`PresetLookup`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::demographics::{Demographics, Gender};
use crate::error::{ProfileError, Result};
use crate::names::NameTables;
use crate::preset::{PresetLookup, VisualPreset};

/// A randomized patient for one play session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub is_pregnant: bool,
    /// `null` on the wire when no preset matched
    pub visual: Option<VisualPreset>,
}

/// Generates patient profiles from a fixed set of name tables
#[derive(Debug, Clone, Default)]
pub struct PatientGenerator {
    names: NameTables,
}

impl PatientGenerator {
    pub fn new(names: NameTables) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &NameTables {
        &self.names
    }

    /// Generate one profile.
    ///
    /// Calls `lookup` exactly once. A lookup with no match yields
    /// `visual: None`; a lookup error is returned as [`ProfileError::Lookup`].
    pub async fn generate<R, L>(
        &self,
        demographics: &Demographics,
        rng: &mut R,
        lookup: &L,
    ) -> Result<PatientProfile>
    where
        R: Rng + Send + ?Sized,
        L: PresetLookup + Sync,
    {
        for warning in demographics.validate()? {
            tracing::warn!(warning = %warning, "Suspicious demographic constraint");
        }

        let gender = demographics.gender.fixed().unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            }
        });
        let age = rng.gen_range(demographics.min_age..=demographics.max_age);
        let name = self.names.pick(gender, rng).to_string();

        let visual = lookup
            .sample(gender)
            .await
            .map_err(|e| ProfileError::Lookup(Box::new(e)))?;

        if let Some(preset) = &visual {
            if preset.gender != gender {
                return Err(ProfileError::PresetMismatch {
                    expected: gender,
                    found: preset.gender,
                });
            }
        } else {
            tracing::debug!(gender = %gender, "No visual preset matched");
        }

        Ok(PatientProfile {
            name,
            age,
            gender,
            is_pregnant: demographics.is_pregnant,
            visual,
        })
    }
}
