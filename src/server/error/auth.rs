use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingCredentials,

    /// Bearer token failed signature, expiry or claim validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but names a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// Authenticated user attempted an admin-only operation.
    #[error("User {0} attempted an admin operation without admin permissions")]
    AdminRequired(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with a generic message; the specific reason
/// is only logged at debug level to avoid leaking which part of the check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
