use sqlx::PgPool;

use crate::api::dto::{UserProfileDto, UserRole};
use crate::auth::password;
use crate::commands::RegisterCommand;
use crate::database::models::User;
use crate::error::ApiError;

/// Create an account with the default role and a hashed credential.
/// Conflict when the username is taken.
pub async fn register(pool: &PgPool, cmd: RegisterCommand) -> Result<UserProfileDto, ApiError> {
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
    .bind(UserRole::User.to_string())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Registered user {} ({})", user_id, cmd.username);
    UserProfileDto::from_row(&User {
        user_id,
        full_name: cmd.full_name,
        username: cmd.username,
        password_hash,
        role: UserRole::User.to_string(),
    })
}

pub(crate) fn validate_new_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::validation_error("Username must not be empty"));
    }
    if password.is_empty() {
        return Err(ApiError::validation_error("Password must not be empty"));
    }
    Ok(())
}
