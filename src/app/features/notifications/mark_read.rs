use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use time::OffsetDateTime;

use crate::app::{db, error::AppError, session::ApiSession, tenant, AppState};

/// POST /api/notifications/:id/read — Mark one notification read.
/// Same check-then-act shape as any record mutation: load, authorize, write,
/// all inside one transaction.
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.db.begin().await?;

    let notification = db::notifications::find_by_id(&mut *tx, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    tenant::require_record_access(
        &session.identity,
        notification.user_id.as_deref(),
        notification.organization_id.as_deref(),
    )?;

    let now = OffsetDateTime::now_utc().unix_timestamp();
    db::notifications::mark_read(&mut *tx, &notification.id, now).await?;

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark-read routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications/:id/read", post(submit))
}
