use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_common::error::RolodexError;

pub struct ApiError(pub RolodexError);

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RolodexError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RolodexError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
