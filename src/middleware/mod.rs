pub mod auth;

pub use auth::{jwt_auth_middleware, require_super_admin, AuthUser};
