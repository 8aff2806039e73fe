use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Router fallback for paths no route matches.
pub async fn route_not_found() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::RouteNotFound.default_message(),
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::MethodNotAllowed.default_message(),
    ));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
