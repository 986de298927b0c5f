use axum::body::Body;
use axum::http;
use axum::http::Uri;
use axum::http::header;
use axum::http::response::Builder as ResponseBuilder;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use rust_embed::EmbeddedFile;
use rust_embed::RustEmbed;
use thiserror::Error;

const INDEX_PAGE: &str = "index.html";

/// The single-page docs frontend, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "../frontend/dist"]
pub struct DocsAssets;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to build response: {0}")]
    ResponseBuildError(#[from] http::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        tracing::error!("{}", &self);

        let (status, body) = match self {
            Self::ResponseBuildError(_) => (http::StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
            Self::NotFound(path) => (http::StatusCode::NOT_FOUND, format!("Asset not found: {path}")),
        };

        (status, body).into_response()
    }
}

/// Serves embedded files; unknown paths get the docs page so client-side
/// navigation keeps working.
pub async fn static_handler(uri: Uri) -> Result<Response, AssetError> {
    let requested = uri.path().trim_start_matches('/');
    let (path, asset) = match DocsAssets::get(requested).filter(|_| !requested.is_empty()) {
        Some(asset) => (requested, asset),
        None => {
            if !requested.is_empty() {
                tracing::debug!("Falling back to {} for path: {}", INDEX_PAGE, requested);
            }
            let index = DocsAssets::get(INDEX_PAGE).ok_or_else(|| AssetError::NotFound(requested.to_string()))?;
            (INDEX_PAGE, index)
        }
    };
    let builder = if path == INDEX_PAGE {
        no_cache_response_builder()
    } else {
        asset_response_builder(&asset, path)
    };
    Ok(builder.body(Body::from(asset.data.into_owned()))?)
}

fn no_cache_response_builder() -> ResponseBuilder {
    Response::builder()
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
}

fn asset_response_builder(asset: &EmbeddedFile, path: &str) -> ResponseBuilder {
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let etag = format!("\"{}\"", hex::encode(asset.metadata.sha256_hash()));
    let builder = Response::builder()
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .header(header::ETAG, etag);
    match last_modified(asset) {
        Some(last_modified) => builder.header(header::LAST_MODIFIED, last_modified),
        None => builder,
    }
}

#[allow(clippy::cast_possible_wrap)] // the timestamp will be in the range of i64 for quite some time
fn last_modified(asset: &EmbeddedFile) -> Option<String> {
    asset
        .metadata
        .last_modified()
        .and_then(|ts| Utc.timestamp_opt(ts as i64, 0).single())
        .map(|dt| dt.to_rfc2822())
}
