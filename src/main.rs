//! saptools - main entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use saptools::{
    cli::{Cli, run_command},
    config::Config,
    sap::{ReqwestTransport, SalesOrderClient},
    tools::ToolRegistry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries tool output only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("saptools=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let transport = Arc::new(ReqwestTransport::new()?);
    let client = SalesOrderClient::new(config.sap, transport);

    let registry = ToolRegistry::new();
    registry.register_builtin_tools(client).await;

    run_command(cli.command, &registry).await
}
