use sqlx::FromRow;
use time::OffsetDateTime;

use crate::app::domain::UserId;

/// Database row for sessions table. The row id is the bearer token.
#[derive(Debug, FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub active_organization_id: Option<String>,
    pub expires_at: i64,
    pub created_at: i64,
}

/// Create a new session for a user with no active organization.
/// Returns the session ID (the bearer token).
pub async fn create<'e, E>(
    executor: E,
    user_id: &UserId,
    expires_at: OffsetDateTime,
) -> Result<String, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let session_id = ulid::Ulid::new().to_string();
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query(
        "INSERT INTO sessions (id, user_id, active_organization_id, expires_at, created_at) \
         VALUES (?, ?, NULL, ?, ?)",
    )
    .bind(&session_id)
    .bind(user_id.as_str())
    .bind(expires_at.unix_timestamp())
    .bind(now)
    .execute(executor)
    .await?;

    Ok(session_id)
}

/// Find a valid (non-expired) session by ID.
pub async fn find_valid(
    pool: &sqlx::SqlitePool,
    session_id: &str,
) -> Result<Option<Session>, sqlx::Error> {
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query_as::<_, Session>(
        "SELECT id, user_id, active_organization_id, expires_at, created_at \
         FROM sessions WHERE id = ? AND expires_at > ?",
    )
    .bind(session_id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Set (or clear) the session's active organization.
pub async fn set_active_organization<'e, E>(
    executor: E,
    session_id: &str,
    organization_id: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query("UPDATE sessions SET active_organization_id = ? WHERE id = ?")
        .bind(organization_id)
        .bind(session_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a session (logout).
pub async fn delete<'e, E>(
    executor: E,
    session_id: &str,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query("DELETE FROM sessions WHERE id = ?")
        .bind(session_id)
        .execute(executor)
        .await?;
    Ok(())
}
