use axum::{http::StatusCode, response::IntoResponse};

/// Default 404 Not Found handler.
///
/// Used as the final fallback in the router; returns a plain
/// `404 Not Found` response without a body.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
