use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::app::{db, error::AppError, session::ApiSession, AppState};

/// Which slice of unread notifications to mark. Omitted = both.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkScope {
    User,
    Organization,
}

/// Request body for the bulk mark-read operation.
#[derive(Debug, Deserialize)]
pub struct MarkAllRequest {
    pub scope: Option<MarkScope>,
}

/// Response carrying how many notifications were flipped.
#[derive(Debug, Serialize)]
pub struct MarkAllResponse {
    pub count: u64,
}

/// POST /api/notifications/read-all — Mark every unread notification in the
/// selected scope(s) as read.
///
/// All rows flip in one transaction: a failure on any row rolls back the
/// whole batch, so callers never observe a partially-marked feed.
pub async fn submit(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<MarkAllRequest>,
) -> Result<Json<MarkAllResponse>, AppError> {
    let identity = &session.identity;

    let take_user = !matches!(request.scope, Some(MarkScope::Organization));
    let take_org = !matches!(request.scope, Some(MarkScope::User));

    let mut tx = state.db.begin().await?;

    let mut ids = Vec::new();
    if take_user {
        ids.extend(db::notifications::unread_ids_by_user(&mut *tx, &identity.user_id).await?);
    }
    if take_org {
        if let Some(org_id) = identity.active_organization_id.as_deref() {
            ids.extend(db::notifications::unread_ids_by_organization(&mut *tx, org_id).await?);
        }
    }
    // A notification addressed to both the user and the org shows up twice
    ids.sort();
    ids.dedup();

    let read_at = OffsetDateTime::now_utc().unix_timestamp();
    for id in &ids {
        db::notifications::mark_read(&mut *tx, id, read_at).await?;
    }

    tx.commit().await?;

    Ok(Json(MarkAllResponse {
        count: ids.len() as u64,
    }))
}

/// Bulk mark-read routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications/read-all", post(submit))
}
