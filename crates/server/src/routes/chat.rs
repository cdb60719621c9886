//! AI patient chat

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use deadpool_postgres::Pool;
use serde::{Deserialize, Serialize};

use crate::ai::GeminiClient;
use crate::ai::roleplay::{PromptPatient, build_prompt};
use crate::db::{ChatRepository, ChatRole};
use crate::error::AppError;

/// In-character reply sent whenever the AI round trip fails
const FALLBACK_ANSWER: &str = "Maaf dok... (Sakit banget/Server Error)";

/// Chat history settings
#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    pub history_limit: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    roblox_id: Option<String>,
    #[serde(rename = "pesan")]
    message: String,
    #[serde(rename = "konteksPenyakit", default)]
    condition: Option<String>,
    #[serde(default)]
    patient_profile: Option<PromptPatient>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "jawaban")]
    answer: String,
}

/// POST /api/chat-ai — Ask the AI patient a question
///
/// Both the question and the reply are appended to the player's chat
/// history when `robloxId` is given. Malformed bodies get the same
/// in-character fallback as AI failures, never a bare extractor error.
pub async fn chat(
    State(pool): State<Pool>,
    Extension(client): Extension<Option<GeminiClient>>,
    Extension(settings): Extension<ChatSettings>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let result = match body {
        Ok(Json(body)) => converse(pool, client, settings, &body).await,
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    };

    match result {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { answer })),
        Err(e) => {
            tracing::error!(error = %e, "Chat failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    answer: FALLBACK_ANSWER.to_string(),
                }),
            )
        }
    }
}

async fn converse(
    pool: Pool,
    client: Option<GeminiClient>,
    settings: ChatSettings,
    body: &ChatRequest,
) -> Result<String, AppError> {
    let history = ChatRepository::new(pool, settings.history_limit);
    let roblox_id = body.roblox_id.as_deref();

    // The question is logged even when no reply can be produced
    if let Some(roblox_id) = roblox_id {
        history.append(roblox_id, ChatRole::User, &body.message).await?;
    }

    let client =
        client.ok_or_else(|| AppError::Unavailable("GEMINI_API_KEY not configured".to_string()))?;

    let prompt = build_prompt(
        body.patient_profile.as_ref(),
        body.condition.as_deref().unwrap_or_default(),
        &body.message,
    );
    let answer = client
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Internal(format!("AI reply failed: {}", e)))?;

    if let Some(roblox_id) = roblox_id {
        history.append(roblox_id, ChatRole::Model, &answer).await?;
    }

    Ok(answer)
}
