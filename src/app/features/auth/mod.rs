use axum::Router;

use crate::app::AppState;

pub mod login;
pub mod logout;
pub mod service;
pub mod session_info;
pub mod signup;

/// Auth routes: signup, login, logout, current session.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(signup::routes())
        .merge(login::routes())
        .merge(logout::routes())
        .merge(session_info::routes())
}
