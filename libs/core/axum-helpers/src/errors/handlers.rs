use axum::response::Response;
use axum::response::IntoResponse;

use super::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
