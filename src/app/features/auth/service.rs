use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};

use crate::app::{
    db,
    domain::{Email, HashedPassword, Password, UserId},
    error::AppError,
};

/// Sign up a new user. Returns (user id, bearer token) on success.
pub async fn signup(
    pool: &SqlitePool,
    email: &Email,
    password: &Password,
    session_ttl_days: i64,
) -> Result<(String, String), AppError> {
    // Generic message so signup cannot be used to probe for accounts
    if db::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::Auth(
            "Unable to create account. If you already have an account, please log in.".to_string(),
        ));
    }

    let password_hash = HashedPassword::from_password(password)
        .map_err(|_| AppError::Internal)?;

    let user_id = UserId::new();
    let new_user = db::NewUser {
        id: user_id.clone(),
        email: email.clone(),
        password_hash,
    };

    let mut tx = pool.begin().await?;

    db::users::insert(&mut *tx, &new_user).await?;

    let expires_at = OffsetDateTime::now_utc() + Duration::days(session_ttl_days);
    let token = db::sessions::create(&mut *tx, &new_user.id, expires_at).await?;

    tx.commit().await?;

    Ok((user_id.as_str(), token))
}

/// Log in a user. Returns (user id, bearer token) on success.
pub async fn login(
    pool: &SqlitePool,
    email: &Email,
    password: &Password,
    session_ttl_days: i64,
) -> Result<(String, String), AppError> {
    let user = db::find_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid email or password".to_string()))?;

    let stored_hash = HashedPassword::from_string(user.password_hash);
    stored_hash
        .verify(password)
        .map_err(|_| AppError::Auth("Invalid email or password".to_string()))?;

    let user_id = UserId::from_string(&user.id).map_err(|_| AppError::Internal)?;

    let expires_at = OffsetDateTime::now_utc() + Duration::days(session_ttl_days);
    let token = db::sessions::create(pool, &user_id, expires_at).await?;

    Ok((user.id, token))
}
