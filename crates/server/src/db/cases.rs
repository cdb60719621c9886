use deadpool_postgres::Pool;
use dentsim_core::MedicalCase;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Repository for medical case definitions, stored as JSONB documents
#[derive(Clone)]
pub struct CaseRepository {
    pool: Pool,
}

impl CaseRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, case: &MedicalCase) -> Result<(), AppError> {
        let data = serde_json::to_value(case)?;
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO medical_cases (case_id, data) VALUES ($1, $2)",
                &[&case.case_id, &data],
            )
            .await?;
        Ok(())
    }

    /// Pick one case uniformly at random, or `None` if there are no cases
    pub async fn random(&self) -> Result<Option<MedicalCase>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT data FROM medical_cases ORDER BY random() LIMIT 1",
                &[],
            )
            .await?;

        match row {
            Some(row) => {
                let data: JsonValue = row.get(0);
                Ok(Some(serde_json::from_value(data)?))
            }
            None => Ok(None),
        }
    }
}
