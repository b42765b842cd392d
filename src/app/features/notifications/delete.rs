use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};

use crate::app::{db, error::AppError, session::ApiSession, tenant, AppState};

/// DELETE /api/notifications/:id — Delete a notification.
///
/// Beyond the usual owner-or-member rule, the user who created a
/// notification may always take it back, even when it was addressed to
/// someone else.
pub async fn remove(
    session: ApiSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.db.begin().await?;

    let notification = db::notifications::find_by_id(&mut *tx, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    let allowed = tenant::has_record_access(
        &session.identity,
        notification.user_id.as_deref(),
        notification.organization_id.as_deref(),
    ) || notification.created_by.as_deref() == Some(session.identity.user_id.as_str());

    if !allowed {
        return Err(AppError::Forbidden);
    }

    db::notifications::delete(&mut *tx, &notification.id).await?;

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Notification deletion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications/:id", delete(remove))
}
