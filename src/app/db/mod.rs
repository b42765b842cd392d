pub mod notification_preferences;
pub mod notifications;
pub mod organizations;
pub mod sessions;
pub mod todos;
pub mod users;

pub use users::{find_by_email, NewUser, User};
