use axum::{extract::State, http::StatusCode, routing::post, Router};

use crate::app::{db, error::AppError, session::ApiSession, AppState};

/// POST /api/auth/logout — Invalidate the current bearer session.
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    db::sessions::delete(&state.db, &session.session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Logout routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/logout", post(submit))
}
