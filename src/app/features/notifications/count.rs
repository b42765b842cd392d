use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::{db, error::AppError, session::ApiSession, AppState};

/// Unread counts, per scope and combined.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total: i64,
    pub user: i64,
    pub organization: i64,
}

/// GET /api/notifications/count — Unread notification counts.
pub async fn count(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let identity = &session.identity;

    let user = db::notifications::count_unread_by_user(&state.db, &identity.user_id).await?;
    let organization = match identity.active_organization_id.as_deref() {
        Some(org_id) => {
            db::notifications::count_unread_by_organization(&state.db, org_id).await?
        }
        None => 0,
    };

    Ok(Json(CountResponse {
        total: user + organization,
        user,
        organization,
    }))
}

/// Notification count routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications/count", get(count))
}
