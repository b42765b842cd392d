use sqlx::FromRow;
use time::OffsetDateTime;

/// Database row for todos table.
#[derive(Debug, FromRow, serde::Serialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub user_id: String,
    pub organization_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Data structure for inserting a new todo. Ownership stamps are set once
/// here and never updated.
pub struct NewTodo {
    pub id: String,
    pub title: String,
    pub user_id: String,
    pub organization_id: Option<String>,
}

/// Insert a new todo. `created_at` and `updated_at` start equal.
pub async fn insert<'e, E>(
    executor: E,
    todo: &NewTodo,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query(
        "INSERT INTO todos (id, title, completed, user_id, organization_id, created_at, updated_at) \
         VALUES (?, ?, 0, ?, ?, ?, ?)",
    )
    .bind(&todo.id)
    .bind(&todo.title)
    .bind(&todo.user_id)
    .bind(&todo.organization_id)
    .bind(now)
    .bind(now)
    .execute(executor)
    .await?;

    Ok(())
}

/// Find all todos owned by a user, newest first.
pub async fn find_by_user<'e, E>(
    executor: E,
    user_id: &str,
) -> Result<Vec<Todo>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, completed, user_id, organization_id, created_at, updated_at \
         FROM todos WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Find all todos stamped with an organization, newest first.
pub async fn find_by_organization<'e, E>(
    executor: E,
    organization_id: &str,
) -> Result<Vec<Todo>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, completed, user_id, organization_id, created_at, updated_at \
         FROM todos WHERE organization_id = ? ORDER BY created_at DESC",
    )
    .bind(organization_id)
    .fetch_all(executor)
    .await
}

/// Find a todo by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    id: &str,
) -> Result<Option<Todo>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, completed, user_id, organization_id, created_at, updated_at \
         FROM todos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Update a todo's payload fields and refresh `updated_at`. The user and
/// organization stamps are deliberately absent from the statement.
pub async fn update<'e, E>(
    executor: E,
    id: &str,
    title: &str,
    completed: bool,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query("UPDATE todos SET title = ?, completed = ?, updated_at = ? WHERE id = ?")
        .bind(title)
        .bind(completed)
        .bind(now)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}

/// Delete a todo by ID.
pub async fn delete<'e, E>(
    executor: E,
    id: &str,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
