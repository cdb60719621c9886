//! Shared-secret authentication for game and admin routes

use axum::{
    Extension, Json,
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Shared secret the Roblox server sends in the `Authorization` header
#[derive(Clone)]
pub struct SecretAuth {
    secret: Option<String>,
}

impl SecretAuth {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    /// No secret configured means every request is allowed
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        match &self.secret {
            None => true,
            Some(secret) => headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == secret),
        }
    }
}

/// Reject requests without the shared secret with 403
pub async fn auth_middleware(
    Extension(auth): Extension<SecretAuth>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !auth.is_authorized(request.headers()) {
        tracing::warn!(path = %request.uri().path(), "Rejected request with bad secret");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Access Denied" })),
        )
            .into_response();
    }

    next.run(request).await
}
