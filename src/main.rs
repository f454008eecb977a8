//! Command-line front end for the ZMI management console client.
//!
//! Plays the role of the form UI: it supplies the field values and the host
//! string, and prints whatever ends up in the shared output field.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zmi_console::config::{load_config, ConsoleConfig};
use zmi_console::dispatch::Dispatcher;
use zmi_console::output::OutputField;
use zmi_console::transport::HttpTransport;

#[derive(Parser)]
#[command(name = "zmi-console")]
#[command(about = "Client console for the ZMI management service", long_about = None)]
struct Cli {
    /// Management service host (overrides the config file).
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Management service port (overrides the config file).
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a client on the remote service
    Install {
        /// Query string sent as the request body
        query: String,
    },
    /// Uninstall a client
    Uninstall {
        /// Attribute name sent as the request body
        name: String,
    },
    /// Print a named ZMI object
    PrintZmi {
        /// ZMI object name sent as the request body
        name: String,
    },
    /// Print a single attribute
    PrintAttribute {
        /// Attribute name sent as the request body
        attribute: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConsoleConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "zmi_console={}",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = cli.host.unwrap_or_else(|| config.target.host.clone());
    let port = cli.port.unwrap_or(config.target.port);

    tracing::info!(host = %host, port = port, "configuration resolved");

    let output = OutputField::new();
    let dispatcher = Dispatcher::with_port(HttpTransport::new(), output.clone(), port);

    let handle = match cli.command {
        Commands::Install { query } => dispatcher.install(&query, &host),
        Commands::Uninstall { name } => dispatcher.uninstall(&name, &host),
        Commands::PrintZmi { name } => dispatcher.print_zmi(&name, &host),
        Commands::PrintAttribute { attribute } => dispatcher.print_attribute(&attribute, &host),
    };

    if let Some(handle) = handle {
        handle.await?;
    }

    // The output field is the only result channel; remote errors show up
    // there as plain text like everything else.
    println!("{}", output.get());

    Ok(())
}
