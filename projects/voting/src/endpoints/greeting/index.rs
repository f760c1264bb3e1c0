use axum::response::IntoResponse;
use tracing::info;

/// Axum handler: GET /
pub async fn handler() -> impl IntoResponse {
    info!("Hello!");
    "Hello, Movie Voters!"
}
