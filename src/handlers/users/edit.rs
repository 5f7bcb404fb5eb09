use sqlx::PgPool;

use crate::api::dto::UserProfileDto;
use crate::auth::password;
use crate::commands::{EditUserBody, EditUserCommand};
use crate::database::models::User;
use crate::error::ApiError;

/// Partial edit of a user: only fields supplied in the body overwrite.
/// SuperAdmin-only; the role guard runs before dispatch ever sees this.
pub async fn edit_user(pool: &PgPool, cmd: EditUserCommand) -> Result<UserProfileDto, ApiError> {
    let mut tx = pool.begin().await?;

    let mut user = sqlx::query_as::<_, User>(
        "SELECT user_id, full_name, username, password_hash, role \
         FROM users WHERE user_id = $1",
    )
    .bind(cmd.user_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| ApiError::not_found("User not found"))?;

    if let Some(new_username) = &cmd.body.username {
        if new_username.trim().is_empty() {
            return Err(ApiError::validation_error("Username must not be empty"));
        }
        if *new_username != user.username {
            let taken: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND user_id <> $2)",
            )
            .bind(new_username)
            .bind(cmd.user_id)
            .fetch_one(&mut *tx)
            .await?;
            if taken {
                return Err(ApiError::conflict("Username is already taken"));
            }
        }
    }

    let new_hash = match &cmd.body.password {
        Some(plain) if plain.is_empty() => {
            return Err(ApiError::validation_error("Password must not be empty"))
        }
        Some(plain) => Some(password::hash_password(plain)?),
        None => None,
    };

    apply_edit(&mut user, &cmd.body, new_hash);

    sqlx::query(
        "UPDATE users SET full_name = $1, username = $2, password_hash = $3, role = $4 \
         WHERE user_id = $5",
    )
    .bind(&user.full_name)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(user.user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Edited user {}", user.user_id);
    UserProfileDto::from_row(&user)
}

/// Overwrite only the fields the body supplies
fn apply_edit(user: &mut User, body: &EditUserBody, new_hash: Option<String>) {
    if let Some(full_name) = &body.full_name {
        user.full_name = full_name.clone();
    }
    if let Some(username) = &body.username {
        user.username = username.clone();
    }
    if let Some(hash) = new_hash {
        user.password_hash = hash;
    }
    if let Some(role) = body.role {
        user.role = role.to_string();
    }
}
