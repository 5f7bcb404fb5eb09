use axum::extract::{OriginalUri, Path, Query};
use axum::response::Response;
use axum::{Extension, Json};

use crate::commands::{
    dispatch, ChangePasswordCommand, Command, CreateUserCommand, DeleteUserCommand, EditUserBody,
    EditUserCommand, GetProfileCommand, GetUsersCommand, LoginCommand, RegisterCommand,
};
use crate::middleware::AuthUser;

use super::respond;

/// POST /users/login
pub async fn login(OriginalUri(uri): OriginalUri, Json(cmd): Json<LoginCommand>) -> Response {
    respond(uri.path(), dispatch(None, Command::Login(cmd)).await)
}

/// POST /users/register
pub async fn register(OriginalUri(uri): OriginalUri, Json(cmd): Json<RegisterCommand>) -> Response {
    respond(uri.path(), dispatch(None, Command::Register(cmd)).await)
}

/// POST /users/change-password
pub async fn change_password(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Json(cmd): Json<ChangePasswordCommand>,
) -> Response {
    respond(
        uri.path(),
        dispatch(Some(&caller), Command::ChangePassword(cmd)).await,
    )
}

/// GET /users/profile - caller's own profile
pub async fn get_own_profile(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
) -> Response {
    let cmd = GetProfileCommand { user_id: None };
    respond(uri.path(), dispatch(Some(&caller), Command::GetProfile(cmd)).await)
}

/// GET /users/profile/:user_id
pub async fn get_profile(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Path(user_id): Path<i32>,
) -> Response {
    let cmd = GetProfileCommand {
        user_id: Some(user_id),
    };
    respond(uri.path(), dispatch(Some(&caller), Command::GetProfile(cmd)).await)
}

/// GET /users - filtered, paged listing
pub async fn get_all(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Query(cmd): Query<GetUsersCommand>,
) -> Response {
    respond(uri.path(), dispatch(Some(&caller), Command::GetUsers(cmd)).await)
}

/// POST /users - administrative creation
pub async fn create(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Json(cmd): Json<CreateUserCommand>,
) -> Response {
    respond(uri.path(), dispatch(Some(&caller), Command::CreateUser(cmd)).await)
}

/// PUT /users/:user_id - partial edit, SuperAdmin only
pub async fn edit(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Path(user_id): Path<i32>,
    Json(body): Json<EditUserBody>,
) -> Response {
    let cmd = EditUserCommand { user_id, body };
    respond(uri.path(), dispatch(Some(&caller), Command::EditUser(cmd)).await)
}

/// DELETE /users/:user_id - SuperAdmin only
pub async fn delete(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Path(user_id): Path<i32>,
) -> Response {
    let cmd = DeleteUserCommand { user_id };
    respond(uri.path(), dispatch(Some(&caller), Command::DeleteUser(cmd)).await)
}
