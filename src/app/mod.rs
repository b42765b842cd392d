use axum::Router;
use sqlx::SqlitePool;

/// Human-readable application name, used in logs and client-facing copy.
pub const APP_NAME: &str = "Stackpad";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: config::Config,
}

/// API routes (auth, orgs, todos, notifications). Merged in lib.rs.
pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .merge(features::auth::routes())
        .merge(features::orgs::routes())
        .merge(features::todos::routes())
        .merge(features::notifications::routes())
}

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod features;
pub mod session;
pub mod single_writer;
pub mod tenant;
