use sqlx::PgPool;

use crate::api::dto::UserProfileDto;
use crate::commands::GetProfileCommand;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Load a profile by id, defaulting to the authenticated caller's own
pub async fn get_profile(
    pool: &PgPool,
    caller: &AuthUser,
    cmd: GetProfileCommand,
) -> Result<UserProfileDto, ApiError> {
    let target_id = cmd.user_id.unwrap_or(caller.user_id);

    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, full_name, username, password_hash, role \
         FROM users WHERE user_id = $1",
    )
    .bind(target_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    UserProfileDto::from_row(&user)
}
