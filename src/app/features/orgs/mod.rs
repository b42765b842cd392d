use axum::Router;

use crate::app::AppState;

pub mod add_member;
pub mod create;
pub mod list;
pub mod members;
pub mod switch;

/// Organization routes: create, list, switch active org, member management.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(list::routes())
        .merge(switch::routes())
        .merge(members::routes())
        .merge(add_member::routes())
}
