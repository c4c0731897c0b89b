//! CLI command handling.
//!
//! Provides subcommands for:
//! - Fetching sales orders once (`orders`)
//! - Invoking any registered tool with JSON parameters (`call`)
//! - Printing the registered tool schemas (`schema`)

use std::io::Write;

use clap::{ColorChoice, Parser, Subcommand};

use crate::tools::ToolRegistry;

#[derive(Parser, Debug)]
#[command(name = "saptools")]
#[command(about = "SAP Graph sandbox tools for agent runtimes")]
#[command(
    long_about = "Fetches sales orders from the SAP Graph API sandbox.\nThe API key is read from --api-key or SAP_API_KEY.\nExamples:\n  saptools orders --top 5\n  saptools call get_sales_orders '{\"top\": 2}'"
)]
#[command(version)]
#[command(color = ColorChoice::Auto)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch recent sales orders and print them
    #[command(
        about = "Fetch recent sales orders",
        long_about = "Calls get_sales_orders once and prints the result.\nExample: saptools orders --top 5"
    )]
    Orders {
        /// Number of orders to retrieve (defaults to SAP_DEFAULT_TOP, or 3)
        #[arg(short, long)]
        top: Option<u32>,

        /// API key for this call (overrides SAP_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Invoke a registered tool by name
    #[command(
        about = "Invoke a tool with JSON parameters",
        long_about = "Runs any registered tool.\nExample: saptools call get_sales_orders '{\"top\": 1}'"
    )]
    Call {
        /// Tool name
        tool: String,

        /// Parameters as a JSON object
        #[arg(default_value = "{}")]
        params: String,
    },

    /// Print the schemas of all registered tools
    Schema,
}

/// Run a CLI command against the registry, writing results to stdout.
pub async fn run_command(command: Command, registry: &ToolRegistry) -> anyhow::Result<()> {
    let text = command_output(command, registry).await?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Produce the text a command prints.
pub async fn command_output(command: Command, registry: &ToolRegistry) -> anyhow::Result<String> {
    match command {
        Command::Orders { top, api_key } => {
            let params = orders_params(top, api_key);
            Ok(registry
                .execute("get_sales_orders", params)
                .await?
                .as_text())
        }
        Command::Call { tool, params } => {
            let params = parse_params(&params)?;
            Ok(registry.execute(&tool, params).await?.as_text())
        }
        Command::Schema => Ok(serde_json::to_string_pretty(&registry.schemas().await)?),
    }
}

fn orders_params(top: Option<u32>, api_key: Option<String>) -> serde_json::Value {
    let mut params = serde_json::Map::new();
    if let Some(top) = top {
        params.insert("top".to_string(), top.into());
    }
    if let Some(key) = api_key {
        params.insert("api_key".to_string(), key.into());
    }
    serde_json::Value::Object(params)
}

fn parse_params(raw: &str) -> anyhow::Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| anyhow::anyhow!("parameters must be a JSON object: {e}"))?;
    if !value.is_object() {
        anyhow::bail!("parameters must be a JSON object, got {value}");
    }
    Ok(value)
}
