//! Patient roleplay prompt
//!
//! The game client scans replies for the bracketed tags (`[NAMA:..]`,
//! `[UMUR:..]`, ...) to fill the anamnesis sheet, so the tag names are part
//! of the client contract.

use serde::Deserialize;

const DEFAULT_NAME: &str = "Pasien";
const DEFAULT_AGE: u32 = 25;
const DEFAULT_GENDER: &str = "Male";

/// Patient identity echoed back by the game client. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptPatient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Build the full prompt for one doctor question
pub fn build_prompt(patient: Option<&PromptPatient>, condition: &str, question: &str) -> String {
    let name = patient
        .and_then(|p| p.name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME);
    let age = patient.and_then(|p| p.age).unwrap_or(DEFAULT_AGE);
    let gender = patient
        .and_then(|p| p.gender.as_deref())
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_GENDER);

    format!(
        r#"ROLEPLAY INSTRUCTION:
Kamu adalah pasien poli gigi bernama {name} ({gender}, {age} tahun).
Kamu sedang berbicara dengan Dokter Gigi (User).

KONDISI MEDIS KAMU:
"{condition}"

ATURAN PENTING:
1. Jawablah secara natural, pendek (max 2 kalimat), dan seperti orang awam yang sedang sakit.
2. JANGAN gunakan istilah medis canggih (kecuali kamu diceritakan sebagai dokter).
3. [WAJIB] Jika jawabanmu mengandung informasi tentang:
   - Nama -> Tambahkan tag [NAMA:{name}] di akhir.
   - Umur -> Tambahkan tag [UMUR:{age}] di akhir.
   - Keluhan Utama/Rasa Sakit -> Tambahkan tag [KELUHAN:...] di akhir.
   - Lokasi Gigi -> Tambahkan tag [LOKASI:...] di akhir.
   - Durasi Sakit -> Tambahkan tag [DURASI:...] di akhir.
   - Pemicu Sakit -> Tambahkan tag [RIWAYAT:...] di akhir.

CONTOH:
Dokter: "Namanya siapa?"
Kamu: "Saya Budi dok. [NAMA:Budi]"

Dokter: "Apa yang dirasa?"
Kamu: "Gigi bawah kanan saya nyut-nyutan banget kalau kena air es. [KELUHAN:Gigi ngilu][LOKASI:Rahang Bawah Kanan][RIWAYAT:Sakit kena dingin]"

Dokter bertanya: {question}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_patient_identity() {
        let patient = PromptPatient {
            name: Some("Siti".into()),
            age: Some(31),
            gender: Some("Female".into()),
        };
        let prompt = build_prompt(Some(&patient), "Gigi berlubang besar", "Sakitnya di mana?");

        assert!(prompt.contains("bernama Siti (Female, 31 tahun)"));
        assert!(prompt.contains("[NAMA:Siti]"));
        assert!(prompt.contains("[UMUR:31]"));
        assert!(prompt.contains("\"Gigi berlubang besar\""));
        assert!(prompt.ends_with("Dokter bertanya: Sakitnya di mana?"));
    }

    #[test]
    fn falls_back_to_defaults() {
        let prompt = build_prompt(None, "", "Halo");
        assert!(prompt.contains("bernama Pasien (Male, 25 tahun)"));

        let partial = PromptPatient {
            name: Some(String::new()),
            age: None,
            gender: Some("Female".into()),
        };
        let prompt = build_prompt(Some(&partial), "", "Halo");
        assert!(prompt.contains("bernama Pasien (Female, 25 tahun)"));
    }

    #[test]
    fn lists_every_tag() {
        let prompt = build_prompt(None, "", "Halo");
        for tag in ["[NAMA:", "[UMUR:", "[KELUHAN:", "[LOKASI:", "[DURASI:", "[RIWAYAT:"] {
            assert!(prompt.contains(tag), "missing {tag}");
        }
    }
}
