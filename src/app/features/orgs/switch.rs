use axum::{extract::State, routing::put, Json, Router};
use serde::Deserialize;

use crate::app::{
    db,
    error::AppError,
    session::{ApiSession, Identity},
    tenant, AppState,
};

/// Request body for switching the session's active organization.
/// `organization_id: null` (or omitted) returns the session to personal context.
#[derive(Debug, Deserialize)]
pub struct SwitchRequest {
    pub organization_id: Option<String>,
}

/// PUT /api/session/active-organization — Switch organization context.
/// Membership is validated against the membership table, never taken from the client.
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<SwitchRequest>,
) -> Result<Json<Identity>, AppError> {
    if let Some(org_id) = request.organization_id.as_deref() {
        tenant::require_org_member(&state.db, &session.identity.user_id, org_id).await?;
    }

    db::sessions::set_active_organization(
        &state.db,
        &session.session_id,
        request.organization_id.as_deref(),
    )
    .await?;

    Ok(Json(Identity {
        user_id: session.identity.user_id,
        active_organization_id: request.organization_id,
    }))
}

/// Active-organization switch routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/session/active-organization", put(submit))
}
