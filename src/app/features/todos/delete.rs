use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};

use crate::app::{db, error::AppError, session::ApiSession, tenant, AppState};

/// DELETE /api/todos/:id — Delete a todo. Not idempotent: deleting a missing
/// or already-deleted todo is `NotFound`.
pub async fn remove(
    session: ApiSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.db.begin().await?;

    let todo = db::todos::find_by_id(&mut *tx, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    tenant::require_record_access(
        &session.identity,
        Some(todo.user_id.as_str()),
        todo.organization_id.as_deref(),
    )?;

    db::todos::delete(&mut *tx, &todo.id).await?;

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Todo deletion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/todos/:id", delete(remove))
}
