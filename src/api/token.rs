use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    spotify::{auth::exchange_code, request::ApiError},
    types::TokenExchangeRequest,
    warning,
};

/// Server-side relay for the authorization-code exchange.
///
/// Keeps the confidential client secret off any user-facing surface: callers
/// post `{code, redirectUri}` and receive the provider's token JSON back.
/// Missing fields are rejected with 400 before any upstream call; upstream
/// failures map to 500 with an error object carrying the provider details
/// where available.
pub async fn token(Json(body): Json<TokenExchangeRequest>) -> impl IntoResponse {
    if body.code.is_empty() || body.redirect_uri.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid request: code and redirectUri are required"})),
        );
    }

    match exchange_code(&body.code, &body.redirect_uri).await {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(value) => (StatusCode::OK, Json(value)),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Token exchange failed", "details": e.to_string()})),
            ),
        },
        Err(ApiError::Status(status, details)) => {
            warning!("Token exchange rejected upstream (status {})", status);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Spotify API error", "details": details})),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Token exchange failed", "details": e.to_string()})),
        ),
    }
}
