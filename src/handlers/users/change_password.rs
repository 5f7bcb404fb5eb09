use sqlx::PgPool;

use crate::auth::password;
use crate::commands::ChangePasswordCommand;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Verify the caller's current password and persist a new hash
pub async fn change_password(
    pool: &PgPool,
    caller: &AuthUser,
    cmd: ChangePasswordCommand,
) -> Result<(), ApiError> {
    if cmd.new_password.is_empty() {
        return Err(ApiError::validation_error("New password must not be empty"));
    }

    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, full_name, username, password_hash, role \
         FROM users WHERE user_id = $1",
    )
    .bind(caller.user_id)
    .fetch_optional(&mut *tx)
    .await?
    // Token outlived the account
    .ok_or_else(|| ApiError::unauthorized("Account no longer exists"))?;

    if !password::verify_password(&cmd.old_password, &user.password_hash) {
        return Err(ApiError::unauthorized("Old password does not match"));
    }

    let new_hash = password::hash_password(&cmd.new_password)?;
    sqlx::query("UPDATE users SET password_hash = $1 WHERE user_id = $2")
        .bind(&new_hash)
        .bind(caller.user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("User {} changed password", caller.user_id);
    Ok(())
}
