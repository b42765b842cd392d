use std::collections::HashSet;

use axum::{extract::State, routing::get, Json, Router};

use crate::app::{db, db::todos::Todo, error::AppError, session::ApiSession, AppState};

/// GET /api/todos — Union of the user's own todos and the active
/// organization's todos, newest first.
pub async fn list(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let identity = &session.identity;

    let user_todos = db::todos::find_by_user(&state.db, &identity.user_id).await?;
    let org_todos = match identity.active_organization_id.as_deref() {
        Some(org_id) => db::todos::find_by_organization(&state.db, org_id).await?,
        None => Vec::new(),
    };

    // A todo created under an active org satisfies both queries; it must
    // appear exactly once.
    let mut seen = HashSet::new();
    let mut todos: Vec<Todo> = Vec::with_capacity(user_todos.len() + org_todos.len());
    for todo in user_todos.into_iter().chain(org_todos) {
        if seen.insert(todo.id.clone()) {
            todos.push(todo);
        }
    }
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

    Ok(Json(todos))
}

/// Todo listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/todos", get(list))
}
