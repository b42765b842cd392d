use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;

use crate::app::domain::{NotificationPriority, NotificationScope, NotificationType};

const COLUMNS: &str = "id, type, title, message, priority, scope, user_id, organization_id, \
project_id, related_entity_id, related_entity_type, data, action_url, is_read, read_at, \
created_by, created_at, expires_at";

/// Database row for notifications table.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Notification {
    pub id: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
    pub scope: NotificationScope,
    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    pub project_id: Option<String>,
    pub related_entity_id: Option<String>,
    pub related_entity_type: Option<String>,
    pub data: Option<Json<serde_json::Value>>,
    pub action_url: Option<String>,
    pub is_read: bool,
    pub read_at: Option<i64>,
    pub created_by: Option<String>,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}

/// Data structure for inserting a new notification.
pub struct NewNotification {
    pub id: String,
    pub kind: NotificationType,
    pub title: String,
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
    pub created_by: String,
    pub expires_at: Option<i64>,
}

/// Insert a new, unread notification.
pub async fn insert<'e, E>(
    executor: E,
    notification: &NewNotification,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query(
        "INSERT INTO notifications (id, type, title, message, priority, scope, user_id, \
         organization_id, project_id, related_entity_id, related_entity_type, data, action_url, \
         is_read, read_at, created_by, created_at, expires_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, NULL, ?, ?, ?)",
    )
    .bind(&notification.id)
    .bind(notification.kind)
    .bind(&notification.title)
    .bind(&notification.message)
    .bind(notification.priority)
    .bind(notification.scope)
    .bind(&notification.user_id)
    .bind(&notification.organization_id)
    .bind(&notification.project_id)
    .bind(&notification.related_entity_id)
    .bind(&notification.related_entity_type)
    .bind(notification.data.as_ref().map(Json))
    .bind(&notification.action_url)
    .bind(&notification.created_by)
    .bind(now)
    .bind(notification.expires_at)
    .execute(executor)
    .await?;

    Ok(())
}

/// Find a notification by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    id: &str,
) -> Result<Option<Notification>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_as::<_, Notification>(&format!(
        "SELECT {COLUMNS} FROM notifications WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// The user-addressed slice, newest first, bounded by `limit`.
pub async fn find_by_user<'e, E>(
    executor: E,
    user_id: &str,
    include_read: bool,
    limit: i64,
) -> Result<Vec<Notification>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let filter = if include_read { "" } else { " AND is_read = 0" };
    sqlx::query_as::<_, Notification>(&format!(
        "SELECT {COLUMNS} FROM notifications WHERE user_id = ?{filter} \
         ORDER BY created_at DESC LIMIT ?"
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// The organization-addressed slice, newest first, bounded by `limit`.
pub async fn find_by_organization<'e, E>(
    executor: E,
    organization_id: &str,
    include_read: bool,
    limit: i64,
) -> Result<Vec<Notification>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let filter = if include_read { "" } else { " AND is_read = 0" };
    sqlx::query_as::<_, Notification>(&format!(
        "SELECT {COLUMNS} FROM notifications WHERE organization_id = ?{filter} \
         ORDER BY created_at DESC LIMIT ?"
    ))
    .bind(organization_id)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// Count unread notifications addressed to a user.
pub async fn count_unread_by_user<'e, E>(
    executor: E,
    user_id: &str,
) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar(
        "SELECT count(*) FROM notifications WHERE user_id = ? AND is_read = 0",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Count unread notifications addressed to an organization.
pub async fn count_unread_by_organization<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar(
        "SELECT count(*) FROM notifications WHERE organization_id = ? AND is_read = 0",
    )
    .bind(organization_id)
    .fetch_one(executor)
    .await
}

/// Ids of unread notifications addressed to a user.
pub async fn unread_ids_by_user<'e, E>(
    executor: E,
    user_id: &str,
) -> Result<Vec<String>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar("SELECT id FROM notifications WHERE user_id = ? AND is_read = 0")
        .bind(user_id)
        .fetch_all(executor)
        .await
}

/// Ids of unread notifications addressed to an organization.
pub async fn unread_ids_by_organization<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<Vec<String>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar("SELECT id FROM notifications WHERE organization_id = ? AND is_read = 0")
        .bind(organization_id)
        .fetch_all(executor)
        .await
}

/// Mark a single notification read at the given instant.
pub async fn mark_read<'e, E>(
    executor: E,
    id: &str,
    read_at: i64,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query("UPDATE notifications SET is_read = 1, read_at = ? WHERE id = ?")
        .bind(read_at)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a notification by ID.
pub async fn delete<'e, E>(
    executor: E,
    id: &str,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query("DELETE FROM notifications WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Remove notifications whose expiry has passed. Returns how many were removed.
/// Maintenance path: runs on a timer, needs no session.
pub async fn delete_expired<'e, E>(
    executor: E,
    now: i64,
) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let result = sqlx::query(
        "DELETE FROM notifications WHERE expires_at IS NOT NULL AND expires_at < ?",
    )
    .bind(now)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
