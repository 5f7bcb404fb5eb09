//! Command objects and the static dispatcher.
//!
//! Each use case is one variant of [`Command`]; `dispatch` is an exhaustive
//! match from variant to handler function, so a command kind with zero or
//! duplicate handlers cannot exist past compilation. Commands are transient
//! per-request values and are never persisted.

use axum::{response::IntoResponse, response::Response, Json};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::{ManufactureJobDto, SessionDto, SimpleOrderDto, UserProfileDto, UserRole};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::{manufacture, orders, users};
use crate::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCommand {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug)]
pub struct GetProfileCommand {
    pub user_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersCommand {
    pub search: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

/// Partial edit body: only supplied fields overwrite
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserBody {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug)]
pub struct EditUserCommand {
    pub user_id: i32,
    pub body: EditUserBody,
}

#[derive(Debug)]
pub struct DeleteUserCommand {
    pub user_id: i32,
}

#[derive(Debug)]
pub struct GetManufactureJobCommand {
    pub manufacture_id: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrdersCommand {
    pub page: Option<i64>,
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
}

/// One variant per use case
#[derive(Debug)]
pub enum Command {
    Login(LoginCommand),
    Register(RegisterCommand),
    ChangePassword(ChangePasswordCommand),
    GetProfile(GetProfileCommand),
    GetUsers(GetUsersCommand),
    CreateUser(CreateUserCommand),
    EditUser(EditUserCommand),
    DeleteUser(DeleteUserCommand),
    GetManufactureJob(GetManufactureJobCommand),
    GetOrders(GetOrdersCommand),
}

/// Typed handler results, one shape per response kind
#[derive(Debug)]
pub enum Reply {
    Session(SessionDto),
    Profile(UserProfileDto),
    Profiles(Vec<UserProfileDto>),
    ManufactureJob(ManufactureJobDto),
    Orders(Vec<SimpleOrderDto>),
    Ack,
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Session(dto) => Json(dto).into_response(),
            Reply::Profile(dto) => Json(dto).into_response(),
            Reply::Profiles(dtos) => Json(dtos).into_response(),
            Reply::ManufactureJob(dto) => Json(dto).into_response(),
            Reply::Orders(dtos) => Json(dtos).into_response(),
            Reply::Ack => Json(json!({ "success": true })).into_response(),
        }
    }
}

/// Route a command to its single handler and return the result unchanged.
/// Cancellation follows the request future: axum drops it when the caller
/// disconnects, which cancels any in-flight query.
pub async fn dispatch(caller: Option<&AuthUser>, command: Command) -> Result<Reply, ApiError> {
    let pool = DatabaseManager::pool().await?;

    match command {
        Command::Login(cmd) => users::login(pool, cmd).await.map(Reply::Session),
        Command::Register(cmd) => users::register(pool, cmd).await.map(Reply::Profile),
        Command::ChangePassword(cmd) => users::change_password(pool, authenticated(caller)?, cmd)
            .await
            .map(|_| Reply::Ack),
        Command::GetProfile(cmd) => users::get_profile(pool, authenticated(caller)?, cmd)
            .await
            .map(Reply::Profile),
        Command::GetUsers(cmd) => users::get_users(pool, cmd).await.map(Reply::Profiles),
        Command::CreateUser(cmd) => users::create_user(pool, cmd).await.map(Reply::Profile),
        Command::EditUser(cmd) => users::edit_user(pool, cmd).await.map(Reply::Profile),
        Command::DeleteUser(cmd) => users::delete_user(pool, cmd).await.map(|_| Reply::Ack),
        Command::GetManufactureJob(cmd) => manufacture::get_job(pool, cmd)
            .await
            .map(Reply::ManufactureJob),
        Command::GetOrders(cmd) => orders::get_orders(pool, cmd).await.map(Reply::Orders),
    }
}

fn authenticated(caller: Option<&AuthUser>) -> Result<&AuthUser, ApiError> {
    caller.ok_or_else(|| ApiError::unauthorized("Authentication required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_deserialize_from_camel_case_bodies() {
        let cmd: ChangePasswordCommand =
            serde_json::from_str(r#"{"oldPassword": "a", "newPassword": "b"}"#).unwrap();
        assert_eq!(cmd.old_password, "a");
        assert_eq!(cmd.new_password, "b");

        let cmd: RegisterCommand =
            serde_json::from_str(r#"{"username": "alice", "password": "Pw1!", "fullName": "Alice A"}"#)
                .unwrap();
        assert_eq!(cmd.full_name, "Alice A");
    }

    #[test]
    fn paging_params_accept_both_spellings() {
        let cmd: GetUsersCommand = serde_json::from_str(r#"{"page": 2, "pageSize": 10}"#).unwrap();
        assert_eq!(cmd.page_size, Some(10));

        let cmd: GetUsersCommand = serde_json::from_str(r#"{"page": 2, "page_size": 10}"#).unwrap();
        assert_eq!(cmd.page_size, Some(10));

        let cmd: GetOrdersCommand = serde_json::from_str(r#"{"page_size": 5}"#).unwrap();
        assert_eq!(cmd.page_size, Some(5));
    }

    #[test]
    fn edit_body_fields_are_all_optional() {
        let body: EditUserBody = serde_json::from_str(r#"{"fullName": "New Name"}"#).unwrap();
        assert_eq!(body.full_name.as_deref(), Some("New Name"));
        assert!(body.username.is_none());
        assert!(body.password.is_none());
        assert!(body.role.is_none());
    }

    #[test]
    fn role_deserializes_by_symbolic_name() {
        let cmd: CreateUserCommand = serde_json::from_str(
            r#"{"username": "root", "password": "x", "fullName": "Root", "role": "SuperAdmin"}"#,
        )
        .unwrap();
        assert_eq!(cmd.role, UserRole::SuperAdmin);

        let err = serde_json::from_str::<CreateUserCommand>(
            r#"{"username": "root", "password": "x", "fullName": "Root", "role": "0"}"#,
        );
        assert!(err.is_err());
    }
}
