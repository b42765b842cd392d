use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::app::{
    db,
    db::notification_preferences::NotificationPreferences,
    domain::DigestFrequency,
    error::AppError,
    session::ApiSession,
    AppState,
};

/// Request body for updating preferences. Every field optional: only
/// provided fields change.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub email_enabled: Option<bool>,
    pub push_enabled: Option<bool>,

    pub issue_notifications: Option<bool>,
    pub project_notifications: Option<bool>,
    pub comment_notifications: Option<bool>,
    pub due_date_notifications: Option<bool>,
    pub dependency_notifications: Option<bool>,
    pub org_announcement_notifications: Option<bool>,

    pub digest_frequency: Option<DigestFrequency>,

    pub quiet_hours_enabled: Option<bool>,
    pub quiet_hours_start: Option<String>,
    pub quiet_hours_end: Option<String>,
}

fn apply(prefs: &mut NotificationPreferences, request: UpdatePreferencesRequest) {
    if let Some(v) = request.email_enabled {
        prefs.email_enabled = v;
    }
    if let Some(v) = request.push_enabled {
        prefs.push_enabled = v;
    }
    if let Some(v) = request.issue_notifications {
        prefs.issue_notifications = v;
    }
    if let Some(v) = request.project_notifications {
        prefs.project_notifications = v;
    }
    if let Some(v) = request.comment_notifications {
        prefs.comment_notifications = v;
    }
    if let Some(v) = request.due_date_notifications {
        prefs.due_date_notifications = v;
    }
    if let Some(v) = request.dependency_notifications {
        prefs.dependency_notifications = v;
    }
    if let Some(v) = request.org_announcement_notifications {
        prefs.org_announcement_notifications = v;
    }
    if let Some(v) = request.digest_frequency {
        prefs.digest_frequency = v;
    }
    if let Some(v) = request.quiet_hours_enabled {
        prefs.quiet_hours_enabled = v;
    }
    if let Some(v) = request.quiet_hours_start {
        prefs.quiet_hours_start = Some(v);
    }
    if let Some(v) = request.quiet_hours_end {
        prefs.quiet_hours_end = Some(v);
    }
}

/// GET /api/notification-preferences — Preferences for the current
/// (user, active organization) context; defaults if never saved.
pub async fn show(
    session: ApiSession,
    State(state): State<AppState>,
) -> Result<Json<NotificationPreferences>, AppError> {
    let identity = &session.identity;

    let prefs = db::notification_preferences::find(
        &state.db,
        &identity.user_id,
        identity.active_organization_id.as_deref(),
    )
    .await?
    .unwrap_or_else(|| {
        NotificationPreferences::defaults(
            identity.user_id.clone(),
            identity.active_organization_id.clone(),
        )
    });

    Ok(Json(prefs))
}

/// PUT /api/notification-preferences — Partial update; creates the row from
/// defaults on first save.
pub async fn update(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<Json<NotificationPreferences>, AppError> {
    let identity = &session.identity;

    let mut tx = state.db.begin().await?;

    let existing = db::notification_preferences::find(
        &mut *tx,
        &identity.user_id,
        identity.active_organization_id.as_deref(),
    )
    .await?;

    let is_new = existing.is_none();
    let mut prefs = existing.unwrap_or_else(|| {
        NotificationPreferences::defaults(
            identity.user_id.clone(),
            identity.active_organization_id.clone(),
        )
    });

    apply(&mut prefs, request);

    if is_new {
        db::notification_preferences::insert(&mut *tx, &prefs).await?;
    } else {
        db::notification_preferences::update(&mut *tx, &prefs).await?;
    }

    tx.commit().await?;

    Ok(Json(prefs))
}

/// Preference routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notification-preferences", get(show).put(update))
}
