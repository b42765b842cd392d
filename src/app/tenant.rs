//! Ownership and tenant isolation enforcement.
//!
//! **Rule**: a record is writable by its owning user, or by anyone whose
//! active organization matches the record's organization stamp. Membership
//! is validated against the database on every org switch; the access checks
//! here only ever compare against the already-validated active org.

use crate::app::{
    db,
    domain::{OrganizationId, OrganizationRole, UserId},
    error::AppError,
    session::Identity,
};

/// Owned-or-member predicate. Ownership first (single field compare), then
/// the active-organization fallback. A record with neither stamp matches
/// nobody.
pub fn has_record_access(
    identity: &Identity,
    owner_user_id: Option<&str>,
    organization_id: Option<&str>,
) -> bool {
    if owner_user_id == Some(identity.user_id.as_str()) {
        return true;
    }
    match (identity.active_organization_id.as_deref(), organization_id) {
        (Some(active), Some(org)) => active == org,
        _ => false,
    }
}

/// Enforcing form of [`has_record_access`]. Used on every update and delete.
pub fn require_record_access(
    identity: &Identity,
    owner_user_id: Option<&str>,
    organization_id: Option<&str>,
) -> Result<(), AppError> {
    if has_record_access(identity, owner_user_id, organization_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Validates that the user is a member of the organization. Returns the
/// member's role. Use before making an organization the session's active org.
///
/// Returns `NotFound` (not `Forbidden`) to avoid leaking whether the org exists.
pub async fn require_org_member(
    pool: &sqlx::SqlitePool,
    user_id: &str,
    org_id: &str,
) -> Result<OrganizationRole, AppError> {
    let user_id = UserId::from_string(user_id)
        .map_err(|_| AppError::NotFound("Not found".to_string()))?;
    let org_id = OrganizationId::from_string(org_id)
        .map_err(|_| AppError::NotFound("Not found".to_string()))?;

    db::organizations::find_member_role(pool, &org_id, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))
}
