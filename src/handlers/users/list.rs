use sqlx::PgPool;

use crate::api::dto::UserProfileDto;
use crate::commands::GetUsersCommand;
use crate::database::models::User;
use crate::error::ApiError;

/// List user summaries with optional search and stable id-ordered paging
pub async fn get_users(
    pool: &PgPool,
    cmd: GetUsersCommand,
) -> Result<Vec<UserProfileDto>, ApiError> {
    let (limit, offset) = crate::handlers::paging(cmd.page, cmd.page_size);
    let pattern = cmd
        .search
        .as_deref()
        .map(|s| format!("%{}%", escape_like(s)));

    let users = sqlx::query_as::<_, User>(
        "SELECT user_id, full_name, username, password_hash, role \
         FROM users \
         WHERE $1::text IS NULL OR username ILIKE $1 OR full_name ILIKE $1 \
         ORDER BY user_id \
         LIMIT $2 OFFSET $3",
    )
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    users.iter().map(UserProfileDto::from_row).collect()
}

/// Escape LIKE/ILIKE metacharacters so a search term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
