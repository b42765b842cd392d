use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::app::{db, db::todos::Todo, error::AppError, session::ApiSession, AppState};

/// Request body for creating a todo.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// POST /api/todos — Create a todo stamped with the acting user and their
/// active organization (if any). The stamp never changes afterwards.
pub async fn create(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let identity = &session.identity;
    let todo_id = Ulid::new().to_string();

    let new_todo = db::todos::NewTodo {
        id: todo_id.clone(),
        title: request.title,
        user_id: identity.user_id.clone(),
        organization_id: identity.active_organization_id.clone(),
    };

    db::todos::insert(&state.db, &new_todo).await?;

    let todo = db::todos::find_by_id(&state.db, &todo_id)
        .await?
        .ok_or(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Todo creation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/todos", post(create))
}
