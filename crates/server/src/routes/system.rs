//! Health and metrics endpoints

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use deadpool_postgres::Pool;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::ai::GeminiClient;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    ai: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Check database connectivity and report whether AI chat is configured
pub async fn health(
    State(pool): State<Pool>,
    Extension(client): Extension<Option<GeminiClient>>,
) -> impl IntoResponse {
    let ai = if client.is_some() { "enabled" } else { "disabled" };

    let failure = match pool.get().await {
        Ok(conn) => match conn.query_one("SELECT 1", &[]).await {
            Ok(_) => None,
            Err(e) => Some(format!("Database query failed: {}", e)),
        },
        Err(e) => Some(format!("Database connection failed: {}", e)),
    };

    match failure {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "ok",
                ai,
                reason: None,
            }),
        ),
        Some(reason) => {
            tracing::error!(reason = %reason, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: "unreachable",
                    ai,
                    reason: Some(reason),
                }),
            )
        }
    }
}

/// GET /metrics - Render collected metrics in Prometheus text format
pub async fn metrics(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
