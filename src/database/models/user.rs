use sqlx::FromRow;

/// Persisted user row. Role is stored as TEXT and parsed into `UserRole` at
/// the DTO boundary; the raw row is never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i32,
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
