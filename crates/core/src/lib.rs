//! dentsim-core: Domain types and the patient profile generator
//!
//! This crate holds everything the dental simulator needs that does not
//! touch the network or the database: medical cases, catalog items,
//! demographic constraints, and the randomizer that turns a case into a
//! concrete patient.

pub mod case;
pub mod catalog;
pub mod demographics;
pub mod error;
pub mod generator;
pub mod names;
pub mod preset;

pub use case::{CaseAssets, CaseRewards, Difficulty, MedicalCase, PhysicalExam};
pub use catalog::{Achievement, InventoryEntry, Item};
pub use demographics::{ConstraintWarning, Demographics, Gender, GenderConstraint};
pub use error::ProfileError;
pub use generator::{PatientGenerator, PatientProfile};
pub use names::NameTables;
pub use preset::{PresetLookup, VisualPreset};
