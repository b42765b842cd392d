use axum::Router;

use crate::app::AppState;

pub mod count;
pub mod create;
pub mod delete;
pub mod list;
pub mod mark_all_read;
pub mod mark_read;
pub mod preferences;

/// Notification API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(list::routes())
        .merge(count::routes())
        .merge(mark_read::routes())
        .merge(mark_all_read::routes())
        .merge(delete::routes())
        .merge(preferences::routes())
}
