use sqlx::PgPool;

use crate::commands::DeleteUserCommand;
use crate::error::ApiError;

/// Hard delete. SuperAdmin-only; a second delete of the same id is NotFound.
pub async fn delete_user(pool: &PgPool, cmd: DeleteUserCommand) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
        .bind(cmd.user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    tracing::info!("Deleted user {}", cmd.user_id);
    Ok(())
}
