//! HTTP controllers: parse route/query/body parameters into command objects,
//! invoke the dispatcher, and translate unexpected failures into a generic
//! error response.

pub mod manufacture;
pub mod orders;
pub mod users;

use axum::response::{IntoResponse, Response};

use crate::commands::Reply;
use crate::error::ApiError;

/// Uniform error mapping around every dispatch call. Expected failures pass
/// through with their accurate status; unexpected ones are logged with the
/// originating request path and replaced by a fixed generic body.
pub(crate) fn respond(path: &str, result: Result<Reply, ApiError>) -> Response {
    match result {
        Ok(reply) => reply.into_response(),
        Err(err) if err.is_internal() => {
            tracing::error!("Error in {}: {}", path, err);
            ApiError::internal_server_error("An unexpected error occurred").into_response()
        }
        Err(err) => err.into_response(),
    }
}
