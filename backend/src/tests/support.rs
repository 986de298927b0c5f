use std::net::SocketAddr;

use axum::Router;
use axum_test::TestServer;

use crate::app;
use crate::catalog;
use crate::cfg;
use crate::core;
use crate::tester;

pub const FACEBOOK_PATH: &str = "/api/dl/facebook";
pub const SPOTIFY_PATH: &str = "/api/dl/spotify";

pub fn test_tester(base_url: &str) -> tester::Tester {
    tester::Tester::new(reqwest::Client::new(), base_url).unwrap()
}

pub fn test_context(base_url: &str) -> core::ArcContext {
    let settings = cfg::AppSettings {
        tester: cfg::TesterSettings {
            base_url: base_url.to_string(),
        },
        ..Default::default()
    };
    core::Context::new(catalog::Catalog::builtin(), test_tester(base_url), settings)
}

/// Serves `router` on a loopback port so the tester can make real HTTP calls.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    address
}

/// Full application on a loopback port; its tester targets itself.
pub async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let router = app::create_router(test_context(&format!("http://{address}")));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    address
}

/// A loopback address nothing listens on.
pub async fn closed_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// In-process server whose tester targets `base_url`.
pub fn test_server(base_url: &str) -> TestServer {
    TestServer::new(app::create_router(test_context(base_url))).unwrap()
}
