use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::{
    db,
    domain::{OrganizationId, OrganizationRole, UserId},
    error::AppError,
    session::ApiSession,
    AppState,
};

/// Request body for creating an organization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrgRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Response for a created organization.
#[derive(Debug, Serialize)]
pub struct OrgResponse {
    pub id: String,
    pub name: String,
}

/// POST /api/orgs — Create an organization, join it as owner, make it the
/// session's active organization.
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<CreateOrgRequest>,
) -> Result<(StatusCode, Json<OrgResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let user_id =
        UserId::from_string(&session.identity.user_id).map_err(|_| AppError::Internal)?;
    let org_id = OrganizationId::new();
    let org_id_str = org_id.as_str();

    let mut tx = state.db.begin().await?;

    db::organizations::insert(
        &mut *tx,
        &db::organizations::NewOrganization {
            id: org_id.clone(),
            name: request.name.clone(),
        },
    )
    .await?;
    db::organizations::add_member(&mut *tx, &org_id, &user_id, OrganizationRole::Owner).await?;
    db::sessions::set_active_organization(&mut *tx, &session.session_id, Some(org_id_str.as_str()))
        .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(OrgResponse {
            id: org_id_str,
            name: request.name,
        }),
    ))
}

/// Organization creation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/orgs", post(submit))
}
