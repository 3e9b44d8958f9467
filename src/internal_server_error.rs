//! Defines the response to send when an internal server error occurs.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Describes an internal server error to the client without leaking server details.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": self.description,
                "fix": self.fix,
            })),
        )
            .into_response()
    }
}

pub fn get_internal_server_error_response() -> Response {
    InternalServerError::default().into_response()
}
