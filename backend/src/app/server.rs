use std::error::Error;
use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app;
use crate::catalog;
use crate::cfg;
use crate::core;
use crate::tester;

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigLoadingFailed(#[from] config::ConfigError),

    #[error("CLI error: {0}")]
    CliOperationFailed(#[from] app::CliError),

    #[error("Network address parsing error: {0}")]
    AddressParsingFailed(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    ServerStartingFailed(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Tester setup error: {0}")]
    TesterSetupFailed(#[from] tester::TesterError),
}

pub fn create_context(settings: cfg::AppSettings) -> Result<core::ArcContext, AppError> {
    let http_client = reqwest::Client::builder().build()?;
    let tester = tester::Tester::new(http_client, &settings.get_tester_base_url())?;
    Ok(core::Context::new(catalog::Catalog::builtin(), tester, settings))
}

pub async fn run() {
    if let Err(e) = run_app().await {
        eprintln!("❌ {e}\n");

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {err}");
            source = err.source();
        }

        std::process::exit(1);
    }
}

async fn run_app() -> Result<(), AppError> {
    let cli = app::Cli::parse();

    let settings = cfg::AppSettings::new()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.server.log_directives))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let context = create_context(settings)?;
    match cli.command.unwrap_or_default() {
        app::Command::Serve => serve(context).await,
        command => Ok(app::run_cli(&context, command).await?),
    }
}

async fn serve(context: core::ArcContext) -> Result<(), AppError> {
    let settings = &context.settings;
    let app_run_env = cfg::AppSettings::get_app_run_env();
    if let Some(path) = settings.save_env_config_if_missing(cfg::AppSettings::get_config_path(), &app_run_env)? {
        tracing::info!("Created default config file at {}", path.display());
    }

    let address = settings.get_server_address().parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("🚀 starting server");
    tracing::info!("   app_env: {}", app_run_env);
    tracing::info!("   cfg_dir: {}", cfg::AppSettings::get_config_full_path());
    tracing::info!("   logging: {}", settings.server.log_directives);
    tracing::info!("   tester:  {}", context.tester.base_url());
    tracing::info!("   catalog: {} endpoints", context.catalog.len());
    tracing::info!("   address: http://{}", address);

    let router = app::create_router(context);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Tokio signal handler that will wait for a user to press CTRL+C.
/// We use this in our `Server` method `with_graceful_shutdown`.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, shutting down gracefully"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
