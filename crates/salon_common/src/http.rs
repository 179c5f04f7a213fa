use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, SalonError};

pub mod client;

/// Message sent to clients in place of any 5xx detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Extension trait for SalonError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for SalonError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side failures are logged in full and reported generically.
        let error_message = if status_code.is_server_error() {
            tracing::error!("{}", self);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for SalonError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
