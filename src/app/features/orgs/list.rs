use axum::{extract::State, routing::get, Json, Router};

use crate::app::{db, error::AppError, session::ApiSession, AppState};

/// GET /api/orgs — Organizations the acting user belongs to. Backs the
/// org-switcher UI.
pub async fn list(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<db::organizations::Organization>>, AppError> {
    let orgs = db::organizations::list_for_user(&state.db, &session.identity.user_id).await?;
    Ok(Json(orgs))
}

/// Organization listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/orgs", get(list))
}
