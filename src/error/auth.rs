use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented bearer token does not match any user.
    ///
    /// Results in a 401 Unauthorized response. The token itself is never
    /// logged or echoed back.
    #[error("Bearer token does not match a known user")]
    InvalidToken,

    /// The authenticated user lacks the permission the endpoint requires.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User ID of the authenticated user
    /// - Description of the denied action, for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed variant messages are
/// logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
