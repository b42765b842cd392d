use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::app::{
    db,
    db::notifications::Notification,
    domain::{NotificationPriority, NotificationScope, NotificationType},
    error::AppError,
    session::ApiSession,
    AppState,
};

/// Request body for creating a notification. Recipients are free-form: a
/// notification may target a user, an organization, a project, or any
/// combination.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub kind: NotificationType,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,

    pub priority: NotificationPriority,
    pub scope: NotificationScope,

    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    pub project_id: Option<String>,

    pub related_entity_id: Option<String>,
    pub related_entity_type: Option<String>,

    pub data: Option<serde_json::Value>,
    pub action_url: Option<String>,
    pub expires_at: Option<i64>,
}

/// POST /api/notifications — Create an unread notification. The acting user
/// is recorded as its creator.
pub async fn create(
    session: ApiSession,
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let notification_id = Ulid::new().to_string();

    let new_notification = db::notifications::NewNotification {
        id: notification_id.clone(),
        kind: request.kind,
        title: request.title,
        message: request.message,
        priority: request.priority,
        scope: request.scope,
        user_id: request.user_id,
        organization_id: request.organization_id,
        project_id: request.project_id,
        related_entity_id: request.related_entity_id,
        related_entity_type: request.related_entity_type,
        data: request.data,
        action_url: request.action_url,
        created_by: session.identity.user_id.clone(),
        expires_at: request.expires_at,
    };

    db::notifications::insert(&state.db, &new_notification).await?;

    let notification = db::notifications::find_by_id(&state.db, &notification_id)
        .await?
        .ok_or(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// Notification creation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications", post(create))
}
