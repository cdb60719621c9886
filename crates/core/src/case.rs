//! Medical case definitions (exam scenario, OSCE checklist, rewards)
//!
//! Wire names follow the Indonesian keys the game client reads.

use serde::{Deserialize, Serialize};

use crate::demographics::Demographics;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Image assets shown during the exam
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CaseAssets {
    #[serde(default)]
    pub intraoral: Option<String>,
    #[serde(default)]
    pub radiograf: Option<String>,
}

/// Result text shown for each physical examination tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhysicalExam {
    #[serde(default = "normal")]
    pub sonde: String,
    #[serde(default = "negative")]
    pub perkusi: String,
    #[serde(default = "negative")]
    pub palpasi: String,
    #[serde(default = "normal")]
    pub thermal: String,
    #[serde(default = "grade_zero")]
    pub mobilitas: String,
}

fn normal() -> String {
    "Normal".to_string()
}

fn negative() -> String {
    "Negatif (-)".to_string()
}

fn grade_zero() -> String {
    "Grade 0".to_string()
}

impl Default for PhysicalExam {
    fn default() -> Self {
        Self {
            sonde: normal(),
            perkusi: negative(),
            palpasi: negative(),
            thermal: normal(),
            mobilitas: grade_zero(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseRewards {
    #[serde(default = "default_reward_xp")]
    pub xp: i64,
    #[serde(default = "default_reward_gold")]
    pub gold: i64,
}

fn default_reward_xp() -> i64 {
    50
}

fn default_reward_gold() -> i64 {
    100
}

impl Default for CaseRewards {
    fn default() -> Self {
        Self {
            xp: default_reward_xp(),
            gold: default_reward_gold(),
        }
    }
}

/// A diagnostic scenario together with the patient demographics it allows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCase {
    pub case_id: String,

    #[serde(rename = "namaPenyakit", default)]
    pub disease_name: Option<String>,

    #[serde(rename = "kategori", default = "default_category")]
    pub category: String,

    #[serde(rename = "tingkatKesulitan", default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub demographics: Demographics,

    /// Roleplay context handed to the AI patient
    #[serde(rename = "skenarioAI", default)]
    pub ai_scenario: Option<String>,

    #[serde(default)]
    pub assets: CaseAssets,

    #[serde(rename = "pemeriksaanFisik", default)]
    pub physical_exam: PhysicalExam,

    #[serde(default)]
    pub anamnesis_checklist: Vec<String>,

    #[serde(rename = "pemeriksaanChecklist", default)]
    pub exam_checklist: Vec<String>,

    #[serde(rename = "kontraIndikasi", default)]
    pub contraindications: Vec<String>,

    #[serde(rename = "diagnosisBenar", default)]
    pub correct_diagnosis: Option<String>,

    #[serde(rename = "diagnosisMirip", default)]
    pub similar_diagnoses: Vec<String>,

    #[serde(rename = "planningBenar", default)]
    pub correct_plan: Vec<String>,

    /// Tools that must be on the tray
    #[serde(rename = "alatWajib", default)]
    pub required_tools: Vec<String>,

    #[serde(default)]
    pub rewards: CaseRewards,
}

fn default_category() -> String {
    "General Dentistry".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::GenderConstraint;
    use serde_json::json;

    #[test]
    fn minimal_case_gets_schema_defaults() {
        let case: MedicalCase = serde_json::from_value(json!({"caseId": "K01"})).unwrap();
        assert_eq!(case.category, "General Dentistry");
        assert_eq!(case.difficulty, Difficulty::Easy);
        assert_eq!(case.demographics.gender, GenderConstraint::Any);
        assert_eq!(case.physical_exam.perkusi, "Negatif (-)");
        assert_eq!(case.physical_exam.mobilitas, "Grade 0");
        assert_eq!(case.rewards, CaseRewards { xp: 50, gold: 100 });
        assert!(case.required_tools.is_empty());
    }

    #[test]
    fn keeps_client_field_names() {
        let case: MedicalCase = serde_json::from_value(json!({
            "caseId": "K02",
            "namaPenyakit": "Pulpitis Reversibel",
            "tingkatKesulitan": "Medium",
            "demographics": {"gender": "Female", "minAge": 20, "maxAge": 35},
            "pemeriksaanFisik": {"thermal": "Ngilu sebentar"},
            "alatWajib": ["Sonde Half", "Kaca Mulut"]
        }))
        .unwrap();
        assert_eq!(case.difficulty, Difficulty::Medium);
        assert_eq!(case.physical_exam.thermal, "Ngilu sebentar");
        assert_eq!(case.physical_exam.sonde, "Normal");

        let out = serde_json::to_value(&case).unwrap();
        assert_eq!(out["namaPenyakit"], "Pulpitis Reversibel");
        assert_eq!(out["alatWajib"][1], "Kaca Mulut");
        assert_eq!(out["demographics"]["minAge"], 20);
        assert_eq!(out["kategori"], "General Dentistry");
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let res = serde_json::from_value::<MedicalCase>(json!({
            "caseId": "K03",
            "tingkatKesulitan": "Extreme"
        }));
        assert!(res.is_err());
    }
}
