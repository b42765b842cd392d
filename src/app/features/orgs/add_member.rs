use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use validator::Validate;

use crate::app::{
    db,
    domain::{Email, OrganizationId, OrganizationRole, UserId},
    error::AppError,
    session::ApiSession,
    tenant, AppState,
};

/// Request body for adding a user to the active organization by email.
#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(length(min = 1, max = 254), email)]
    pub email: String,

    /// Defaults to `member`.
    pub role: Option<OrganizationRole>,
}

/// POST /api/orgs/members — Add an existing user to the active organization.
/// Any member may add members (flat trust within an org).
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<AddMemberRequest>,
) -> Result<StatusCode, AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let org_id = session
        .identity
        .active_organization_id
        .as_deref()
        .ok_or_else(|| AppError::Validation("No active organization selected".to_string()))?;

    // Validate the acting user's own membership on every write
    tenant::require_org_member(&state.db, &session.identity.user_id, org_id).await?;

    let email = Email::new(request.email)
        .map_err(|_| AppError::Validation("Invalid email address".to_string()))?;
    let user = db::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let user_id = UserId::from_string(&user.id).map_err(|_| AppError::Internal)?;
    let org = OrganizationId::from_string(org_id).map_err(|_| AppError::Internal)?;

    if db::organizations::find_member_role(&state.db, &org, &user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Validation("Already a member".to_string()));
    }

    db::organizations::add_member(
        &state.db,
        &org,
        &user_id,
        request.role.unwrap_or(OrganizationRole::Member),
    )
    .await?;

    Ok(StatusCode::CREATED)
}

/// Member addition routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/orgs/members", post(submit))
}
