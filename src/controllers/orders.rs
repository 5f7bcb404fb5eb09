use axum::extract::{OriginalUri, Query};
use axum::response::Response;
use axum::Extension;

use crate::commands::{dispatch, Command, GetOrdersCommand};
use crate::middleware::AuthUser;

use super::respond;

/// GET /orders - paged order summaries, newest first
pub async fn get_all(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Query(cmd): Query<GetOrdersCommand>,
) -> Response {
    respond(uri.path(), dispatch(Some(&caller), Command::GetOrders(cmd)).await)
}
