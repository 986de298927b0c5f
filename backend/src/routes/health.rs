use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::core;

/// Healthy when the tester has an HTTP origin to send requests to.
#[allow(clippy::unused_async)]
pub async fn health_check(State(context): State<core::ArcContext>) -> impl IntoResponse {
    let base_url = context.tester.base_url();
    let http_origin = matches!(base_url.scheme(), "http" | "https") && base_url.has_host();
    if !http_origin {
        tracing::error!("Health check failed: tester base URL `{}` is not an HTTP origin", base_url);
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    }

    (StatusCode::OK, "OK")
}
