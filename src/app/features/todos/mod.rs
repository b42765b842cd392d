use axum::Router;

use crate::app::AppState;

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

/// Todo API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(list::routes())
        .merge(create::routes())
        .merge(update::routes())
        .merge(delete::routes())
}
