use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::core;
use crate::tester;

#[rustfmt::skip]
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Endpoint not found in catalog: {0}")]
    EndpointNotFound(String),

    #[error("Tester setup failed")]
    TesterSetupFailed { #[from] source: tester::TesterError },

    #[error("Test request to {0} failed")]
    TestRequestFailed(String),
}

#[derive(Debug, Parser)]
#[command(name = "botzaku")]
#[command(about = "BotzAku API documentation server and endpoint tester", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Default, Subcommand)]
pub enum Command {
    /// Start the documentation server (default)
    #[default]
    Serve,
    /// List all documented endpoints
    Endpoints,
    /// Show one endpoint with its parameters and example response
    Show {
        /// Endpoint path, e.g. /api/dl/facebook
        path: String,
    },
    /// Send a test request to a documented endpoint and print the response
    Test {
        /// Endpoint path, e.g. /api/dl/facebook
        path: String,
        /// Parameter values as KEY=VALUE pairs
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Origin to send the request to, instead of the configured one
        #[arg(short, long)]
        base_url: Option<String>,
    },
}

/// Parses a `KEY=VALUE` pair; the value may itself contain `=`.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid parameter `{arg}`, expected KEY=VALUE")),
    }
}

pub async fn run_cli(context: &core::Context, command: Command) -> Result<(), CliError> {
    match command {
        Command::Serve => {}
        Command::Endpoints => {
            for endpoint in context.catalog.endpoints() {
                println!("{:<7} {:<24} {}", endpoint.method, endpoint.path, endpoint.description);
            }
        }
        Command::Show { path } => {
            let endpoint = context
                .catalog
                .find(&path)
                .ok_or_else(|| CliError::EndpointNotFound(path.clone()))?;
            println!("{} {}", endpoint.method, endpoint.path);
            println!("{}\n", endpoint.description);
            if endpoint.has_parameters() {
                println!("Parameters:");
                for param in &endpoint.parameters {
                    let required = if param.required { "required" } else { "optional" };
                    println!("  {:<12} {:<10} {:<9} {}", param.name, param.kind, required, param.description);
                }
                println!();
            }
            println!("Example response:");
            println!("{}", serde_json::to_string_pretty(&endpoint.response).unwrap_or_default());
        }
        Command::Test { path, params, base_url } => {
            let endpoint = context
                .catalog
                .find(&path)
                .ok_or_else(|| CliError::EndpointNotFound(path.clone()))?;
            let tester = match base_url {
                Some(base_url) => context.tester.with_base_url(&base_url)?,
                None => context.tester.clone(),
            };
            let values = params.into_iter().collect::<tester::ParamValues>();
            let result = tester.run_test(endpoint, &values).await;
            if let Some(status) = result.status {
                println!("HTTP {status}");
            }
            println!("{}", result.body);
            if result.is_failure() {
                return Err(CliError::TestRequestFailed(path));
            }
        }
    }

    Ok(())
}
