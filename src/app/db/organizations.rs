use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::{OrganizationId, OrganizationRole, UserId};

/// Database row for organizations table.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

/// Data structure for inserting a new organization.
pub struct NewOrganization {
    pub id: OrganizationId,
    pub name: String,
}

/// A member of an organization joined with their user record.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct MemberWithUser {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub joined_at: i64,
}

/// List the organizations a user belongs to, oldest first.
pub async fn list_for_user<'e, E>(
    executor: E,
    user_id: &str,
) -> Result<Vec<Organization>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Organization>(
        "SELECT o.id, o.name, o.created_at \
         FROM organizations o \
         JOIN organization_members m ON m.organization_id = o.id \
         WHERE m.user_id = ? \
         ORDER BY o.created_at",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Insert a new organization.
pub async fn insert<'e, E>(
    executor: E,
    organization: &NewOrganization,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query("INSERT INTO organizations (id, name, created_at) VALUES (?, ?, ?)")
        .bind(organization.id.as_str())
        .bind(&organization.name)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

/// Add a user to an organization with a specific role.
pub async fn add_member<'e, E>(
    executor: E,
    organization_id: &OrganizationId,
    user_id: &UserId,
    role: OrganizationRole,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT INTO organization_members (organization_id, user_id, role, created_at) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(organization_id.as_str())
    .bind(user_id.as_str())
    .bind(role.to_string())
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Find a member's role in an organization. Returns None if not a member.
pub async fn find_member_role<'e, E>(
    executor: E,
    organization_id: &OrganizationId,
    user_id: &UserId,
) -> Result<Option<OrganizationRole>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let row: Option<String> = sqlx::query_scalar(
        "SELECT role FROM organization_members WHERE organization_id = ? AND user_id = ?",
    )
    .bind(organization_id.as_str())
    .bind(user_id.as_str())
    .fetch_optional(executor)
    .await?;

    Ok(row.and_then(|r| r.parse::<OrganizationRole>().ok()))
}

/// List members of an organization with their user info, oldest first.
pub async fn list_members<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<Vec<MemberWithUser>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, MemberWithUser>(
        "SELECT m.user_id, u.email, m.role, m.created_at AS joined_at \
         FROM organization_members m \
         JOIN users u ON u.id = m.user_id \
         WHERE m.organization_id = ? \
         ORDER BY m.created_at",
    )
    .bind(organization_id)
    .fetch_all(executor)
    .await
}
