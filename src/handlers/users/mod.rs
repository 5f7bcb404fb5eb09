pub mod change_password;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod profile;
pub mod register;

pub use change_password::change_password;
pub use create::create_user;
pub use delete::delete_user;
pub use edit::edit_user;
pub use list::get_users;
pub use login::login;
pub use profile::get_profile;
pub use register::register;

use crate::database::models::User;
use sqlx::PgPool;

/// Fetch a user row by username, if any
pub(crate) async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, full_name, username, password_hash, role \
         FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
