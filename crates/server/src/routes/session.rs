//! Case sessions: random case plus a freshly generated patient

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use deadpool_postgres::Pool;
use dentsim_core::{MedicalCase, PatientGenerator, PatientProfile, ProfileError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::{CaseRepository, PresetRepository, UserRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    /// When set, the patient is stored as this player's current session
    roblox_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    case_data: MedicalCase,
    patient: PatientProfile,
}

/// GET /api/medical-case/start-session
pub async fn start_session(
    State(pool): State<Pool>,
    Extension(generator): Extension<Arc<PatientGenerator>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionResponse>, AppError> {
    let case = CaseRepository::new(pool.clone())
        .random()
        .await?
        .ok_or_else(|| AppError::NotFound("Belum ada kasus di DB".to_string()))?;

    let presets = PresetRepository::new(pool.clone());
    let mut rng = StdRng::from_entropy();
    // A stored case with impossible demographics is a data fault, not a bad request
    let patient = generator
        .generate(&case.demographics, &mut rng, &presets)
        .await
        .map_err(|e| match e {
            ProfileError::Constraint(msg) => AppError::Internal(format!(
                "Stored case {} has invalid demographics: {}",
                case.case_id, msg
            )),
            other => AppError::from(other),
        })?;

    tracing::info!(
        case_id = %case.case_id,
        gender = %patient.gender,
        age = patient.age,
        has_visual = patient.visual.is_some(),
        "Started case session"
    );

    if let Some(roblox_id) = query.roblox_id.as_deref() {
        let saved = UserRepository::new(pool).save_session(roblox_id, &patient).await?;
        if !saved {
            tracing::warn!(roblox_id = %roblox_id, "Session not saved, no such user");
        }
    }

    Ok(Json(SessionResponse {
        case_data: case,
        patient,
    }))
}
