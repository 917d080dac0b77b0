//! NetBox provider command line
//!
//! Drives the resource adapters outside a host tool: print schemas, run a single
//! operation against a JSON state file, or sweep test objects.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use netbox_client::NetBoxClientTrait;
use netbox_provider::{Provider, ProviderConfig, ResourceData};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Manage NetBox circuits, provider networks and device bays
#[derive(Parser, Debug)]
#[command(name = "netbox-provider", version, about, long_about = None)]
struct Args {
    /// YAML config file; NETBOX_* environment variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print resource schemas as JSON
    Schema {
        /// Only this resource type
        #[arg(long)]
        resource: Option<String>,
    },
    /// Check connectivity and the API token
    Check,
    /// Run one operation and print the resulting state as JSON
    Run {
        /// Resource type, e.g. netbox_circuit
        resource: String,
        operation: Operation,
        /// JSON state file to start from
        #[arg(long)]
        state: Option<PathBuf>,
        /// Object ID to import
        #[arg(long, required_if_eq("operation", "import"))]
        id: Option<String>,
    },
    /// Delete objects whose name starts with a prefix
    Sweep {
        #[arg(long)]
        prefix: String,
        /// Only this resource type
        #[arg(long)]
        resource: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

fn load_state(path: Option<&PathBuf>) -> Result<ResourceData> {
    let Some(path) = path else {
        return Ok(ResourceData::new());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse state file {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let provider = Provider::new();

    match args.command {
        Command::Schema { resource } => match resource {
            Some(name) => print_json(&provider.resource(&name)?.schema())?,
            None => print_json(&provider.schemas())?,
        },
        Command::Check => {
            let client = ProviderConfig::load(args.config.as_deref())?.build_client()?;
            client.validate_token().await?;
            info!("NetBox at {} accepted the API token", client.base_url());
            println!("ok");
        }
        Command::Run {
            resource,
            operation,
            state,
            id,
        } => {
            let adapter = provider.resource(&resource)?;
            let client = ProviderConfig::load(args.config.as_deref())?.build_client()?;
            let api: &dyn NetBoxClientTrait = &client;

            let mut data = match (operation, id) {
                (Operation::Import, Some(id)) => adapter.import(api, &id).await?,
                (Operation::Import, None) => bail!("--id is required for import"),
                _ => load_state(state.as_ref())?,
            };
            match operation {
                Operation::Create => adapter.create(api, &mut data).await?,
                Operation::Read => adapter.read(api, &mut data).await?,
                Operation::Update => adapter.update(api, &mut data).await?,
                Operation::Delete => adapter.delete(api, &mut data).await?,
                Operation::Import => {}
            }
            print_json(&data)?;
        }
        Command::Sweep { prefix, resource } => {
            let client = ProviderConfig::load(args.config.as_deref())?.build_client()?;
            let removed = provider.sweep(&client, &prefix, resource.as_deref()).await?;
            print_json(&removed)?;
        }
    }

    Ok(())
}
