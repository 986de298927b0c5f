use axum::Router;
use axum::routing::get;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::core;
use crate::routes;

/// Back end server built from the docs API, the placeholder downloader and the embedded frontend
pub fn create_router(context: core::ArcContext) -> Router {
    // Routes backing the docs page
    let api_routes = Router::new()
        .route("/api/catalog", get(routes::catalog::list_endpoints)) // all documented endpoints
        .route("/api/catalog/endpoint", get(routes::catalog::get_endpoint)) // lookup by ?path=
        .route("/api/tester/run", post(routes::tester::run_test)) // send a test request
        .with_state(context.clone());

    // Placeholder downloaders documented in the catalog
    let downloader_routes = Router::new()
        .route("/api/dl/facebook", get(routes::downloads::facebook));

    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check)) // Health check endpoint
        .with_state(context);

    // Combine all routes
    Router::new()
        .merge(api_routes)
        .merge(downloader_routes)
        .merge(public_routes)
        .fallback(routes::assets::static_handler) // Serve the docs frontend
        .layer(TraceLayer::new_for_http())
}
