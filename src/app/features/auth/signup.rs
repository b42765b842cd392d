use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::{
    domain::{Email, Password},
    error::AppError,
    AppState,
};

/// Request body for creating an account.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 254), email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Response carrying a fresh bearer token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user_id: String,
}

/// POST /api/auth/signup — Create an account and a first session.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let email = Email::new(request.email)
        .map_err(|e| AppError::Validation(message_or(e, "Invalid email address")))?;
    let password = Password::new(request.password)
        .map_err(|e| AppError::Validation(message_or(e, "Invalid password")))?;

    let (user_id, token) =
        super::service::signup(&state.db, &email, &password, state.config.session_ttl_days).await?;

    Ok((StatusCode::CREATED, Json(SessionResponse { token, user_id })))
}

fn message_or(error: validator::ValidationError, fallback: &str) -> String {
    error
        .message
        .map(|m| m.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Signup routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/signup", post(submit))
}
