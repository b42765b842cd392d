use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::patch,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::app::{db, db::todos::Todo, error::AppError, session::ApiSession, tenant, AppState};

/// Request body for updating a todo (partial update). Only these two fields
/// are patchable; anything else in the payload (including the ownership
/// stamps) is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// PATCH /api/todos/:id — Update a todo.
///
/// The load, the access check, and the write run inside one transaction so
/// a concurrent writer cannot invalidate the check between read and act.
pub async fn update(
    session: ApiSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let mut tx = state.db.begin().await?;

    let todo = db::todos::find_by_id(&mut *tx, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    tenant::require_record_access(
        &session.identity,
        Some(todo.user_id.as_str()),
        todo.organization_id.as_deref(),
    )?;

    // Merge provided fields with existing values
    let title = request.title.as_deref().unwrap_or(&todo.title);
    let completed = request.completed.unwrap_or(todo.completed);

    db::todos::update(&mut *tx, &todo.id, title, completed).await?;

    let updated = db::todos::find_by_id(&mut *tx, &todo.id)
        .await?
        .ok_or(AppError::Internal)?;

    tx.commit().await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Todo update routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/todos/:id", patch(update))
}
