use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::core;
use crate::routes::catalog::CatalogError;
use crate::tester::ParamValues;

#[derive(Debug, Deserialize)]
pub struct RunTestRequest {
    pub path: String,

    #[serde(default)]
    pub params: ParamValues,
}

/// Runs the tester against a catalog endpoint on behalf of the docs page.
pub async fn run_test(
    State(context): State<core::ArcContext>,
    Json(request): Json<RunTestRequest>,
) -> Result<impl IntoResponse, CatalogError> {
    let endpoint = context
        .catalog
        .find(&request.path)
        .ok_or(CatalogError::EndpointNotFound(request.path.clone()))?;

    tracing::info!(method = %endpoint.method, path = %endpoint.path, "Running endpoint test");
    let result = context.tester.run_test(endpoint, &request.params).await;
    Ok(Json(result))
}
