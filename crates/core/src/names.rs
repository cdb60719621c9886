//! Patient name tables keyed by gender

use rand::Rng;

use crate::demographics::Gender;
use crate::error::{ProfileError, Result};

const MALE_NAMES: [&str; 10] = [
    "Budi", "Agus", "Slamet", "Joko", "Rudi", "Eko", "Bambang", "Fajar", "Dedi", "Hendra",
];

const FEMALE_NAMES: [&str; 10] = [
    "Siti", "Sri", "Lestari", "Wati", "Rina", "Ani", "Dewi", "Putri", "Ratna", "Indah",
];

/// Immutable first-name tables, one per gender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTables {
    male: Vec<String>,
    female: Vec<String>,
}

impl NameTables {
    /// Build tables from custom lists. Both lists must be non-empty.
    pub fn new(male: Vec<String>, female: Vec<String>) -> Result<Self> {
        if male.is_empty() {
            return Err(ProfileError::Constraint("male name table is empty".into()));
        }
        if female.is_empty() {
            return Err(ProfileError::Constraint(
                "female name table is empty".into(),
            ));
        }
        Ok(Self { male, female })
    }

    pub fn names(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Draw one name uniformly from the table for `gender`
    pub fn pick<R: Rng + ?Sized>(&self, gender: Gender, rng: &mut R) -> &str {
        let table = self.names(gender);
        &table[rng.gen_range(0..table.len())]
    }
}

impl Default for NameTables {
    fn default() -> Self {
        Self {
            male: MALE_NAMES.iter().map(|s| s.to_string()).collect(),
            female: FEMALE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
