use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use validator::Validate;

use crate::app::{
    domain::{Email, Password},
    error::AppError,
    AppState,
};

use super::signup::SessionResponse;

/// Request body for logging in.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254), email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// POST /api/auth/login — Verify credentials, issue a new session.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let email = Email::new(request.email)
        .map_err(|_| AppError::Auth("Invalid email or password".to_string()))?;
    // Strength rules are not re-checked at login; legacy passwords must verify.
    let password = Password::for_verification(request.password);

    let (user_id, token) =
        super::service::login(&state.db, &email, &password, state.config.session_ttl_days).await?;

    Ok((StatusCode::OK, Json(SessionResponse { token, user_id })))
}

/// Login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(submit))
}
