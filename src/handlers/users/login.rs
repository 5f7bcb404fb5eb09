use sqlx::PgPool;

use crate::api::dto::{SessionDto, UserProfileDto};
use crate::auth::{self, password};
use crate::commands::LoginCommand;
use crate::error::ApiError;

/// Authenticate a username/password pair and issue a signed session token.
/// Unknown username and wrong password return the same error, and the
/// unknown-username path burns a hash verification so timing matches too.
pub async fn login(pool: &PgPool, cmd: LoginCommand) -> Result<SessionDto, ApiError> {
    let Some(user) = super::find_by_username(pool, &cmd.username).await? else {
        password::dummy_verify(&cmd.password);
        return Err(bad_credentials());
    };

    if !password::verify_password(&cmd.password, &user.password_hash) {
        return Err(bad_credentials());
    }

    let profile = UserProfileDto::from_row(&user)?;
    let claims = auth::Claims::new(user.user_id, user.username.clone(), profile.role.to_string());
    let expires_in = claims.expires_in();
    let token = auth::generate_jwt(&claims)?;

    tracing::info!("User {} logged in", user.user_id);
    Ok(SessionDto {
        token,
        expires_in,
        profile,
    })
}

fn bad_credentials() -> ApiError {
    ApiError::unauthorized("Invalid username or password")
}
