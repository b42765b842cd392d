use sqlx::FromRow;

use crate::app::domain::DigestFrequency;

/// Database row for notification_preferences table. One row per
/// (user, organization-context) pair; the organization may be NULL for
/// preferences set outside any organization.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct NotificationPreferences {
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub user_id: String,
    #[serde(skip)]
    pub organization_id: Option<String>,

    pub email_enabled: bool,
    pub push_enabled: bool,

    pub issue_notifications: bool,
    pub project_notifications: bool,
    pub comment_notifications: bool,
    pub due_date_notifications: bool,
    pub dependency_notifications: bool,
    pub org_announcement_notifications: bool,

    pub digest_frequency: DigestFrequency,

    pub quiet_hours_enabled: bool,
    pub quiet_hours_start: Option<String>,
    pub quiet_hours_end: Option<String>,
}

impl NotificationPreferences {
    /// Defaults returned (and inserted) when a user has never saved
    /// preferences for the current organization context.
    pub fn defaults(user_id: String, organization_id: Option<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            user_id,
            organization_id,
            email_enabled: true,
            push_enabled: true,
            issue_notifications: true,
            project_notifications: true,
            comment_notifications: true,
            due_date_notifications: true,
            dependency_notifications: true,
            org_announcement_notifications: true,
            digest_frequency: DigestFrequency::Immediate,
            quiet_hours_enabled: false,
            quiet_hours_start: Some("22:00".to_string()),
            quiet_hours_end: Some("08:00".to_string()),
        }
    }
}

/// Find the preferences row for a (user, organization-context) pair.
/// `IS` instead of `=` so a NULL organization context matches.
pub async fn find<'e, E>(
    executor: E,
    user_id: &str,
    organization_id: Option<&str>,
) -> Result<Option<NotificationPreferences>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_as::<_, NotificationPreferences>(
        "SELECT id, user_id, organization_id, email_enabled, push_enabled, issue_notifications, \
         project_notifications, comment_notifications, due_date_notifications, \
         dependency_notifications, org_announcement_notifications, digest_frequency, \
         quiet_hours_enabled, quiet_hours_start, quiet_hours_end \
         FROM notification_preferences WHERE user_id = ? AND organization_id IS ?",
    )
    .bind(user_id)
    .bind(organization_id)
    .fetch_optional(executor)
    .await
}

/// Insert a full preferences row.
pub async fn insert<'e, E>(
    executor: E,
    prefs: &NotificationPreferences,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        "INSERT INTO notification_preferences (id, user_id, organization_id, email_enabled, \
         push_enabled, issue_notifications, project_notifications, comment_notifications, \
         due_date_notifications, dependency_notifications, org_announcement_notifications, \
         digest_frequency, quiet_hours_enabled, quiet_hours_start, quiet_hours_end) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&prefs.id)
    .bind(&prefs.user_id)
    .bind(&prefs.organization_id)
    .bind(prefs.email_enabled)
    .bind(prefs.push_enabled)
    .bind(prefs.issue_notifications)
    .bind(prefs.project_notifications)
    .bind(prefs.comment_notifications)
    .bind(prefs.due_date_notifications)
    .bind(prefs.dependency_notifications)
    .bind(prefs.org_announcement_notifications)
    .bind(prefs.digest_frequency)
    .bind(prefs.quiet_hours_enabled)
    .bind(&prefs.quiet_hours_start)
    .bind(&prefs.quiet_hours_end)
    .execute(executor)
    .await?;

    Ok(())
}

/// Overwrite the mutable fields of an existing preferences row.
pub async fn update<'e, E>(
    executor: E,
    prefs: &NotificationPreferences,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        "UPDATE notification_preferences SET email_enabled = ?, push_enabled = ?, \
         issue_notifications = ?, project_notifications = ?, comment_notifications = ?, \
         due_date_notifications = ?, dependency_notifications = ?, \
         org_announcement_notifications = ?, digest_frequency = ?, quiet_hours_enabled = ?, \
         quiet_hours_start = ?, quiet_hours_end = ? \
         WHERE id = ?",
    )
    .bind(prefs.email_enabled)
    .bind(prefs.push_enabled)
    .bind(prefs.issue_notifications)
    .bind(prefs.project_notifications)
    .bind(prefs.comment_notifications)
    .bind(prefs.due_date_notifications)
    .bind(prefs.dependency_notifications)
    .bind(prefs.org_announcement_notifications)
    .bind(prefs.digest_frequency)
    .bind(prefs.quiet_hours_enabled)
    .bind(&prefs.quiet_hours_start)
    .bind(&prefs.quiet_hours_end)
    .bind(&prefs.id)
    .execute(executor)
    .await?;

    Ok(())
}
