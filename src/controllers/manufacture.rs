use axum::extract::{OriginalUri, Path};
use axum::response::Response;
use axum::Extension;

use crate::commands::{dispatch, Command, GetManufactureJobCommand};
use crate::middleware::AuthUser;

use super::respond;

/// GET /manufacture/:manufacture_id
pub async fn get_job(
    OriginalUri(uri): OriginalUri,
    Extension(caller): Extension<AuthUser>,
    Path(manufacture_id): Path<i32>,
) -> Response {
    let cmd = GetManufactureJobCommand { manufacture_id };
    respond(
        uri.path(),
        dispatch(Some(&caller), Command::GetManufactureJob(cmd)).await,
    )
}
