use sqlx::PgPool;

use crate::api::dto::UserProfileDto;
use crate::auth::password;
use crate::commands::CreateUserCommand;
use crate::database::models::User;
use crate::error::ApiError;

use super::register::validate_new_credentials;

/// Administrative user creation: same insert path as registration, but the
/// role comes from the request body
pub async fn create_user(pool: &PgPool, cmd: CreateUserCommand) -> Result<UserProfileDto, ApiError> {
    validate_new_credentials(&cmd.username, &cmd.password)?;

    let password_hash = password::hash_password(&cmd.password)?;

    let mut tx = pool.begin().await?;

    let taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(&cmd.username)
            .fetch_one(&mut *tx)
            .await?;
    if taken {
        return Err(ApiError::conflict("Username is already taken"));
    }

    let user_id: i32 = sqlx::query_scalar(
        "INSERT INTO users (full_name, username, password_hash, role) \
         VALUES ($1, $2, $3, $4) RETURNING user_id",
    )
    .bind(&cmd.full_name)
    .bind(&cmd.username)
    .bind(&password_hash)
    .bind(cmd.role.to_string())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Created user {} ({}) with role {}", user_id, cmd.username, cmd.role);
    UserProfileDto::from_row(&User {
        user_id,
        full_name: cmd.full_name,
        username: cmd.username,
        password_hash,
        role: cmd.role.to_string(),
    })
}
