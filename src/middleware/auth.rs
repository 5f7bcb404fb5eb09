use std::str::FromStr;

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::api::dto::UserRole;
use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_super_admin(&self) -> bool {
        self.role == UserRole::SuperAdmin
    }
}

impl TryFrom<Claims> for AuthUser {
    type Error = ApiError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = UserRole::from_str(&claims.role)
            .map_err(|_| ApiError::unauthorized("Invalid token claims"))?;

        Ok(Self {
            user_id: claims.sub,
            username: claims.username,
            role,
        })
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = validate_jwt(&token)
        .map_err(|e| ApiError::unauthorized(format!("Invalid session token: {}", e)))?;

    // Convert claims to AuthUser and inject into request
    let auth_user = AuthUser::try_from(claims)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Role guard layered after `jwt_auth_middleware` on administrative routes.
/// Runs before the handler, so an insufficient role never reaches dispatch.
pub async fn require_super_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let caller = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    if !caller.is_super_admin() {
        return Err(ApiError::forbidden("SuperAdmin role required"));
    }

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn rejects_missing_header() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_err());
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        assert!(extract_bearer_token(&headers_with("Basic abc123")).is_err());
        assert!(extract_bearer_token(&headers_with("Bearer ")).is_err());
    }

    #[test]
    fn extracts_bearer_token() {
        let token = extract_bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn claims_with_unknown_role_are_rejected() {
        let claims = Claims::new(1, "eve".into(), "Root".into());
        assert!(AuthUser::try_from(claims).is_err());
    }

    #[test]
    fn super_admin_check_follows_role() {
        let claims = Claims::new(1, "root".into(), "SuperAdmin".into());
        let user = AuthUser::try_from(claims).unwrap();
        assert!(user.is_super_admin());

        let claims = Claims::new(2, "alice".into(), "User".into());
        let user = AuthUser::try_from(claims).unwrap();
        assert!(!user.is_super_admin());
    }
}
