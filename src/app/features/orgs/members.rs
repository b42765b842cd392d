use axum::{extract::State, routing::get, Json, Router};

use crate::app::{db, error::AppError, session::ApiSession, tenant, AppState};

/// GET /api/orgs/members — Users of the session's active organization.
pub async fn list(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<db::organizations::MemberWithUser>>, AppError> {
    let org_id = session
        .identity
        .active_organization_id
        .as_deref()
        .ok_or_else(|| AppError::Validation("No active organization selected".to_string()))?;

    // Session org could be stale; re-validate membership before listing.
    tenant::require_org_member(&state.db, &session.identity.user_id, org_id).await?;

    let members = db::organizations::list_members(&state.db, org_id).await?;
    Ok(Json(members))
}

/// Member listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/orgs/members", get(list))
}
