use axum::{routing::get, Json, Router};

use crate::app::{
    session::{ApiSession, Identity},
    AppState,
};

/// GET /api/session — The identity behind the presented bearer token.
pub async fn show(session: ApiSession) -> Json<Identity> {
    Json(session.identity)
}

/// Session info routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/session", get(show))
}
