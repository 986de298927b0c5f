use axum::Json;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use url::form_urlencoded;

/// Stand-in for the Facebook downloader: succeeds whenever a `url` is given.
/// A repeated `url` key counts as given if any of its values is non-empty.
#[allow(clippy::unused_async)]
pub async fn facebook(RawQuery(query): RawQuery) -> impl IntoResponse {
    let url = query.as_deref().and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, value)| key == "url" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    });

    match url {
        Some(url) => {
            tracing::info!(url = %url, "Facebook download requested");
            (StatusCode::OK, Json(json!({"success": true, "message": "Example success"})))
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "message": "Example error"})),
        ),
    }
}
