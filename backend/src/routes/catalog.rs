use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::core;

#[derive(Debug, Deserialize)]
pub struct EndpointQuery {
    pub path: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(
            error_type = %std::any::type_name::<Self>(),
            error_message = %self);

        let status = match self {
            Self::EndpointNotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "result": "error",
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// All documented endpoints, in sidebar order.
#[allow(clippy::unused_async)]
pub async fn list_endpoints(State(context): State<core::ArcContext>) -> impl IntoResponse {
    Json(context.catalog.endpoints().to_vec())
}

#[allow(clippy::unused_async)]
pub async fn get_endpoint(
    State(context): State<core::ArcContext>,
    Query(query): Query<EndpointQuery>,
) -> Result<impl IntoResponse, CatalogError> {
    let endpoint = context
        .catalog
        .find(&query.path)
        .ok_or(CatalogError::EndpointNotFound(query.path))?;
    Ok(Json(endpoint.clone()))
}
