//! Bearer-session resolution.
//!
//! Every API operation starts here: the opaque token from the
//! `Authorization` header is exchanged for an [`Identity`], which is then
//! passed explicitly into the service layer. Nothing downstream reads
//! session state ambiently.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::app::{db, error::AppError, AppState};

/// The acting identity for one request: the authenticated user and the
/// organization context they had selected when the token was issued (or
/// switched to since). Lives only for the duration of the request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Identity {
    pub user_id: String,
    pub active_organization_id: Option<String>,
}

/// Look up a bearer token in the session store. Missing, expired, or unknown
/// tokens are all `Unauthorized`; callers never learn which.
pub async fn resolve_identity(
    pool: &sqlx::SqlitePool,
    token: &str,
) -> Result<Identity, AppError> {
    let session = db::sessions::find_valid(pool, token)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Identity {
        user_id: session.user_id,
        active_organization_id: session.active_organization_id,
    })
}

/// Extractor: a resolved bearer session. Handlers that take this cannot run
/// without a valid token.
pub struct ApiSession {
    /// Session row id, which doubles as the bearer token.
    pub session_id: String,
    pub identity: Identity,
}

#[async_trait]
impl FromRequestParts<AppState> for ApiSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized)?;

        let identity = resolve_identity(&state.db, bearer.token()).await?;

        Ok(Self {
            session_id: bearer.token().to_string(),
            identity,
        })
    }
}
