use crate::demographics::Gender;
use thiserror::Error;

/// Errors raised while generating a patient profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid demographic constraint: {0}")]
    Constraint(String),

    #[error("Visual preset lookup failed: {0}")]
    Lookup(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Visual preset gender mismatch: expected {expected}, got {found}")]
    PresetMismatch { expected: Gender, found: Gender },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
